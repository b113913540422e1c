use crate::libs::entity::{Id, Item};

/// Every user-facing message of the application.
///
/// Text lives in the `Display` implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === BOARD MESSAGES ===
    BoardCreated(Id, String),
    BoardUpdated(String),
    BoardDeleted(String),
    BoardCloned(Id, Id),
    BoardNotFound(Id),
    BoardListHeader,
    NoBoardsFound,
    EmptyBoard(String),
    ActiveBoardSet(String),
    ConfirmDeleteBoard(String),

    // === ITEM MESSAGES ===
    ItemCreated(Item, String),
    ItemRenamed(Item, String),
    ItemDeleted(Item),
    ItemCloned(Item, Id),
    ItemNotFound(Item),
    ConfirmDeleteItems(usize),
    AttachmentSet(Id, usize),
    AttachmentCleared(Id),

    // === MOVE MESSAGES ===
    MoveNoOp(Item),
    Swapped(Item, Id),
    Reparented(Item, Id, Id),
    Reordered(Item, i64),

    // === CONFIGURATION MESSAGES ===
    ConfigHeader,
    ConfigSaved,
    PromptDbFile,
    PromptShowAfterChange,
    PromptName,
    PromptTitle,
    PromptDescription,

    // === EXPORT MESSAGES ===
    ExportSuccess(String),
    ExportAttachmentSkipped(Id, String),

    // === GENERIC MESSAGES ===
    OperationCancelled,
    StoreFailure(String),

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    NothingToRollback,
    RollingBack(u32, u32),
    RollbackCompleted(u32),
    DatabaseVersion(u32, u32),
    MigrationPending(u32, String),
    DatabaseNeedsUpdate,
    DatabaseUpToDate,
    MigrationHistory,
    NoMigrationsApplied,
}
