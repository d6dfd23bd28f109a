//! Process exit codes, following BSD `sysexits.h`

/// Bad command line: no subcommand, config file already present
pub const USAGE: i32 = 64;

/// Invalid organization data (duplicate ids)
pub const DATAERR: i32 = 65;

/// No data file given on the command line or in the config
pub const NOINPUT: i32 = 66;

/// Reading or parsing a file failed
pub const IOERR: i32 = 74;

/// Unreadable or invalid config file or `ORGTREE_*` variable
pub const CONFIG: i32 = 78;
