//! Names of the primitives the IR calls into.
//!
//! Everything the translator emits as a [`crate::CallExpr`] that is not a
//! user function resolves to one of these.

// Allocation
pub const NEW_HASH_TABLE: &str = "Data.newHashTable";
pub const NEW_IOREF: &str = "Data.newIORef";
pub const ZERO_VALUE: &str = "zeroValue";

// Reference cells
pub const READ_IOREF: &str = "Data.readIORef";
pub const WRITE_IOREF: &str = "Data.writeIORef";

// Slices
pub const SLICE_APPEND: &str = "Data.sliceAppend";
pub const SLICE_APPEND_SLICE: &str = "Data.sliceAppendSlice";
pub const SLICE_NIL: &str = "slice.nil";

// Hash tables
pub const HASH_TABLE_LOOKUP: &str = "Data.goHashTableLookup";
pub const HASH_TABLE_ALTER: &str = "Data.hashTableAlter";

// Pure slice operations
pub const SLICE_LENGTH: &str = "slice.length";
pub const SLICE_SKIP: &str = "slice.skip";
pub const SLICE_TAKE: &str = "slice.take";
pub const SLICE_SUBSLICE: &str = "slice.subslice";

// Filesystem namespace renames
pub const SLICE_READ_AT: &str = "Base.sliceReadAt";
pub const SLICE_FILE_APPEND: &str = "Base.sliceAppend";
/// Prefix for every other filesystem operation.
pub const FS_PREFIX: &str = "FS.";

// Memory namespace
pub const UINT64_GET: &str = "Data.uint64Get";
pub const UINT64_PUT: &str = "Data.uint64Put";

// Type names
pub const UINT64: &str = "uint64";
pub const BYTE: &str = "byte";
pub const PATH: &str = "Path";
pub const FD: &str = "Fd";
pub const UNIT: &str = "unit";
/// Placeholder element type of `slice.nil`.
pub const ANY_TYPE: &str = "_";
