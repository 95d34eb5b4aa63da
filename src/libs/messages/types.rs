#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),              // id
    TaskUpdated(i64),              // id
    TaskCompleted(i64),            // id
    TaskDeleted(i64),              // id
    TaskNotFound(i64),             // id
    TaskAlreadyCompleted(i64),     // id
    TasksDeletedCount(usize),      // count
    TasksFound(usize),             // count
    TasksMatching(usize, String),  // count, keyword
    NoTasksFound,
    TasksToBeDeleted,
    NoChangesProvided,
    OperationCancelled,

    // === SORT MESSAGES ===
    SortingTasks(usize, String, bool), // count, key, ascending

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleList,

    // === STATISTICS MESSAGES ===
    StatsHeader,
    StatusChartHeader,
    DueDateChartHeader,
    CompletionTrendHeader,

    // === DATABASE MESSAGES ===
    DatabaseOpened(String), // path
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
    NothingToRollback,
    RollingBack(u32, u32),  // from, to
    RollbackCompleted(u32), // version
}
