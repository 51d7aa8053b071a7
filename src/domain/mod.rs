pub mod chart;
pub mod classification;
pub mod star;

/// Centralized logging system for the entire application
pub mod logging {
    use std::fmt::Display;
    use std::sync::OnceLock;

    /// Log levels for structured logging
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub enum LogLevel {
        Trace = 0,
        Debug = 1,
        Info = 2,
        Warn = 3,
        Error = 4,
    }

    impl Display for LogLevel {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                LogLevel::Trace => write!(f, "TRACE"),
                LogLevel::Debug => write!(f, "DEBUG"),
                LogLevel::Info => write!(f, "INFO"),
                LogLevel::Warn => write!(f, "WARN"),
                LogLevel::Error => write!(f, "ERROR"),
            }
        }
    }

    /// Component/Layer identification for logging
    #[derive(Debug, Clone)]
    pub enum LogComponent {
        Domain(&'static str),         // e.g., "Classification", "Chart"
        Application(&'static str),    // e.g., "UseCase", "Coordinator"
        Infrastructure(&'static str), // e.g., "HTTP", "Gateway"
        Presentation(&'static str),   // e.g., "WASM", "UI"
    }

    impl Display for LogComponent {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                LogComponent::Domain(name) => write!(f, "🏛️ Domain::{}", name),
                LogComponent::Application(name) => write!(f, "🎯 Application::{}", name),
                LogComponent::Infrastructure(name) => write!(f, "🔧 Infrastructure::{}", name),
                LogComponent::Presentation(name) => write!(f, "🌐 Presentation::{}", name),
            }
        }
    }

    /// Wall-clock source for log timestamps. Kept behind a trait so entries
    /// can be created outside the browser (native unit tests fall back to 0).
    pub trait TimeProvider: Send + Sync {
        fn now_millis(&self) -> u64;
    }

    static GLOBAL_TIME: OnceLock<Box<dyn TimeProvider>> = OnceLock::new();

    /// Initialize global time provider
    pub fn init_time_provider(provider: Box<dyn TimeProvider>) {
        let _ = GLOBAL_TIME.set(provider);
    }

    fn now_millis() -> u64 {
        GLOBAL_TIME.get().map(|clock| clock.now_millis()).unwrap_or(0)
    }

    /// Render an epoch-millis timestamp as `HH:MM:SS.mmm` wall-clock time
    pub fn format_clock(timestamp: u64) -> String {
        let seconds = timestamp / 1000;
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            (seconds / 3600) % 24,
            (seconds / 60) % 60,
            seconds % 60,
            timestamp % 1000
        )
    }

    /// Structured log entry
    #[derive(Debug, Clone)]
    pub struct LogEntry {
        pub timestamp: u64,
        pub level: LogLevel,
        pub component: LogComponent,
        pub message: String,
        pub metadata: Option<String>,
    }

    /// Centralized logger trait
    pub trait Logger: Send + Sync {
        fn log(&self, entry: LogEntry);

        fn trace(&self, component: LogComponent, message: &str) {
            self.log(LogEntry::new(LogLevel::Trace, component, message.to_string()));
        }

        fn debug(&self, component: LogComponent, message: &str) {
            self.log(LogEntry::new(LogLevel::Debug, component, message.to_string()));
        }

        fn info(&self, component: LogComponent, message: &str) {
            self.log(LogEntry::new(LogLevel::Info, component, message.to_string()));
        }

        fn warn(&self, component: LogComponent, message: &str) {
            self.log(LogEntry::new(LogLevel::Warn, component, message.to_string()));
        }

        fn error(&self, component: LogComponent, message: &str) {
            self.log(LogEntry::new(LogLevel::Error, component, message.to_string()));
        }

        /// Log with metadata (e.g., JSON, additional context)
        fn log_with_metadata(&self, level: LogLevel, component: LogComponent, message: &str, metadata: &str) {
            self.log(LogEntry::new_with_metadata(level, component, message.to_string(), metadata.to_string()));
        }
    }

    impl LogEntry {
        pub fn new(level: LogLevel, component: LogComponent, message: String) -> Self {
            Self {
                timestamp: now_millis(),
                level,
                component,
                message,
                metadata: None,
            }
        }

        pub fn new_with_metadata(level: LogLevel, component: LogComponent, message: String, metadata: String) -> Self {
            Self {
                timestamp: now_millis(),
                level,
                component,
                message,
                metadata: Some(metadata),
            }
        }
    }

    /// Global logger instance using thread-safe static
    static GLOBAL_LOGGER: OnceLock<Box<dyn Logger + Sync + Send>> = OnceLock::new();

    /// Initialize global logger
    pub fn init_logger(logger: Box<dyn Logger + Sync + Send>) {
        let _ = GLOBAL_LOGGER.set(logger);
    }

    /// Get global logger reference
    pub fn get_logger() -> &'static dyn Logger {
        GLOBAL_LOGGER.get()
            .map(|logger| logger.as_ref())
            .unwrap_or_else(|| {
                // Fallback to a no-op logger if not initialized
                static FALLBACK: NoOpLogger = NoOpLogger;
                &FALLBACK
            })
    }

    /// No-op logger for fallback
    struct NoOpLogger;

    impl Logger for NoOpLogger {
        fn log(&self, _entry: LogEntry) {
            // No-op
        }
    }

    /// Convenience macros for logging
    #[macro_export]
    macro_rules! log_trace {
        ($component:expr, $($arg:tt)*) => {
            $crate::domain::logging::get_logger().trace($component, &format!($($arg)*));
        };
    }

    #[macro_export]
    macro_rules! log_debug {
        ($component:expr, $($arg:tt)*) => {
            $crate::domain::logging::get_logger().debug($component, &format!($($arg)*));
        };
    }

    #[macro_export]
    macro_rules! log_info {
        ($component:expr, $($arg:tt)*) => {
            $crate::domain::logging::get_logger().info($component, &format!($($arg)*));
        };
    }

    #[macro_export]
    macro_rules! log_warn {
        ($component:expr, $($arg:tt)*) => {
            $crate::domain::logging::get_logger().warn($component, &format!($($arg)*));
        };
    }

    #[macro_export]
    macro_rules! log_error {
        ($component:expr, $($arg:tt)*) => {
            $crate::domain::logging::get_logger().error($component, &format!($($arg)*));
        };
    }
}

/// Centralized error handling for the entire application
pub mod errors {
    use crate::domain::star::gateway::GatewayError;
    use std::fmt::{Display, Formatter, Result as FmtResult};

    /// Rejections raised while validating user-entered star parameters
    #[derive(Debug, Clone, PartialEq)]
    pub enum ParameterError {
        NonFinite { field: &'static str },
        NonPositive { field: &'static str, value: f64 },
    }

    /// Errors a full simulation run can surface to the UI
    #[derive(Debug, Clone, PartialEq)]
    pub enum RunError {
        InvalidParameters(ParameterError),
        Gateway(GatewayError),
        AlreadyRunning,
    }

    impl Display for ParameterError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                ParameterError::NonFinite { field } => {
                    write!(f, "{} must be a finite number", field)
                }
                ParameterError::NonPositive { field, value } => {
                    write!(f, "{} must be positive, got {}", field, value)
                }
            }
        }
    }

    impl Display for RunError {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                RunError::InvalidParameters(e) => write!(f, "Invalid parameters: {}", e),
                RunError::Gateway(e) => write!(f, "Simulation request failed: {}", e),
                RunError::AlreadyRunning => write!(f, "A simulation run is already in progress"),
            }
        }
    }

    /// Error conversion utilities
    impl From<ParameterError> for RunError {
        fn from(error: ParameterError) -> Self {
            RunError::InvalidParameters(error)
        }
    }

    impl From<GatewayError> for RunError {
        fn from(error: GatewayError) -> Self {
            RunError::Gateway(error)
        }
    }

    pub type RunResult<T> = Result<T, RunError>;
}
