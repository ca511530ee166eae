//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBox as Box, LuCircleCheck as Check, LuCircleHelp as Help, LuCirclePlay as Run,
        LuDatabase as Database, LuDownload as Save, LuFile as File, LuFileText as FileText,
        LuFolder as Folder, LuLock as Lock, LuPencil as Rename, LuPlus as Plus,
        LuSettings as Settings, LuShare2 as Branch, LuTerminal as Terminal, LuTrash2 as Trash,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBox as Box, BsCheckCircle as Check, BsDatabase as Database, BsDownload as Save,
        BsFileEarmark as File, BsFileEarmarkText as FileText, BsFolderFill as Folder,
        BsGear as Settings, BsLockFill as Lock, BsPencil as Rename, BsPlayCircle as Run,
        BsPlusLg as Plus, BsQuestionCircle as Help, BsShare as Branch, BsTerminal as Terminal,
        BsTrash as Trash, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FOLDER, Folder);
themed_icon!(PLUS, Plus);
themed_icon!(TERMINAL, Terminal);
themed_icon!(CLOSE, Close);
themed_icon!(SAVE, Save);
themed_icon!(RENAME, Rename);
themed_icon!(TRASH, Trash);
themed_icon!(BRANCH, Branch);
themed_icon!(BOX, Box);
themed_icon!(RUN, Run);
themed_icon!(LOCK, Lock);
themed_icon!(SETTINGS, Settings);
themed_icon!(DATABASE, Database);
themed_icon!(CHECK, Check);
themed_icon!(HELP, Help);
