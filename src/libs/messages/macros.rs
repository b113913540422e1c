//! Output macros shared by every command.
//!
//! Each macro prints a [`Message`](super::Message) (or anything `Display`)
//! with a fixed prefix. When `LANES_DEBUG` or `RUST_LOG` is set the text
//! becomes a `tracing` event instead, so user output and store diagnostics
//! land in the same stream.
//!
//! | Macro          | Prefix | Debug mode        | Normal mode |
//! |----------------|--------|-------------------|-------------|
//! | `msg_print!`   |        | `tracing::info!`  | stdout      |
//! | `msg_success!` | ✅     | `tracing::info!`  | stdout      |
//! | `msg_info!`    | ℹ️      | `tracing::info!`  | stdout      |
//! | `msg_warning!` | ⚠️      | `tracing::warn!`  | stdout      |
//! | `msg_error!`   | ❌     | `tracing::error!` | stderr      |
//! | `msg_debug!`   | 🔍     | `tracing::debug!` | suppressed  |
//!
//! A trailing `true` pads the message with blank lines. `msg_error_anyhow!`
//! and `msg_bail_anyhow!` turn a message into an `anyhow::Error`.
//!
//! ```rust
//! use lanes::{msg_debug, msg_success};
//! use lanes::libs::messages::Message;
//!
//! msg_success!(Message::ConfigSaved);
//! msg_success!(Message::ConfigSaved, true);
//! msg_debug!(format!("card #{} is already at the boundary", 4));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// True when `LANES_DEBUG` or `RUST_LOG` is set. Read once per process.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| ["LANES_DEBUG", "RUST_LOG"].iter().any(|key| std::env::var_os(key).is_some()))
}

/// Routes one line either to a `tracing` event or to a print macro.
#[doc(hidden)]
#[macro_export]
macro_rules! __msg_emit {
    ($event:ident, $print:ident, $prefix:literal, $msg:expr, $pad:literal) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$event!("{}{}{}{}", $pad, $prefix, $msg, $pad);
        } else {
            $print!("{}{}{}{}", $pad, $prefix, $msg, $pad);
        }
    };
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "", $msg, "")
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "", $msg, "\n")
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "✅ ", $msg, "")
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "✅ ", $msg, "\n")
    };
}

/// Errors go to stderr so board output on stdout stays clean.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::__msg_emit!(error, eprintln, "❌ ", $msg, "")
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(error, eprintln, "❌ ", $msg, "\n")
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_emit!(warn, println, "⚠️ ", $msg, "")
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(warn, println, "⚠️ ", $msg, "\n")
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "ℹ️ ", $msg, "")
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "ℹ️ ", $msg, "\n")
    };
}

/// Silent unless debug mode is on.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
