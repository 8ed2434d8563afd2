//! Shared constants: marker names, default delays, and default user-facing text.

// ── Timing ──────────────────────────────────────────────────────

/// Delay before a server-rendered alert starts fading, in milliseconds.
pub const DEFAULT_ALERT_DISMISS_MS: u32 = 5000;

/// How long a toast stays fully visible, in milliseconds.
pub const DEFAULT_TOAST_DISPLAY_MS: u32 = 3000;

/// Fade transition length before a dismissed node is removed, in milliseconds.
pub const DEFAULT_FADE_MS: u32 = 300;

// ── Markers ─────────────────────────────────────────────────────

pub const ALERT_CLASS: &str = "alert";
pub const SIDEBAR_CLASS: &str = "sidebar";
pub const SIDEBAR_OPEN_CLASS: &str = "open";
pub const MENU_TOGGLE_ID: &str = "menuToggle";
pub const CHAR_COUNT_ATTR: &str = "data-char-count";
pub const VALIDATE_ATTR: &str = "data-validate";
pub const REQUIRED_ATTR: &str = "required";
pub const FIELD_ERROR_CLASS: &str = "error";
pub const PREVIEW_ATTR: &str = "data-preview";
pub const CONFIRM_ATTR: &str = "data-confirm";
pub const CSRF_FIELD_NAME: &str = "csrfmiddlewaretoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// `alt` text of the image rendered into a preview target.
pub const PREVIEW_ALT: &str = "Preview";

// ── Fade-out styling ────────────────────────────────────────────

pub const FADED_OPACITY: &str = "0";
pub const FADED_TRANSFORM: &str = "translateY(-10px)";

// ── Default messages ────────────────────────────────────────────

pub const DEFAULT_VALIDATION_MESSAGE: &str = "Пожалуйста, заполните все обязательные поля";
pub const DEFAULT_CONFIRM_MESSAGE: &str = "Вы уверены?";
pub const DEFAULT_COPY_SUCCEEDED: &str = "Скопировано в буфер обмена!";
pub const DEFAULT_COPY_FAILED: &str = "Ошибка копирования";
