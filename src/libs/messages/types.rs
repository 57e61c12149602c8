#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskDeleted(i64),
    TaskMarkedDone(String),
    TaskMarkedPending(String),
    TaskNotFoundWithId(i64),
    TasksNotFound,
    TasksHeader,
    InvalidTaskName(String),
    ConfirmDeleteTask,
    DeleteTaskTitle(String),
    EditingTask(String),
    NoChangesDetected,
    PromptTaskName,

    // === LIST SCREEN MENU ===
    SelectTaskAction,
    SelectTaskToToggle,
    SelectTaskToEdit,
    SelectTaskToDelete,
    MenuAddTask,
    MenuToggleTask,
    MenuEditTask,
    MenuDeleteTask,
    MenuQuit,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigParseError(String),
    ConfigModuleStorage,
    ConfigModuleUi,
    PromptDbFile,
    DbFileEmpty,
    PromptConfirmDeleteSetting,
    PromptHideDoneSetting,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,

    // === EXPORT MESSAGES ===
    ExportCompleted(String, usize),

    // === GENERAL ===
    OperationCancelled,
}
