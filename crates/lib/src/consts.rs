/// Key holding the resource sequence in a state document.
pub const RESOURCES_KEY: &str = "resources";

/// Key holding the state format version.
pub const VERSION_KEY: &str = "version";

/// Mode assumed for resources that do not declare one.
pub const DEFAULT_MODE: &str = "managed";

/// Infix placed between the original file name and the backup timestamp.
pub const BACKUP_INFIX: &str = ".backup_";

/// `chrono` format of the backup timestamp (`YYYYMMDD_HHMMSS`, local time).
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// File extension of state files picked up by discovery.
pub const STATE_FILE_EXTENSION: &str = "tfstate";
