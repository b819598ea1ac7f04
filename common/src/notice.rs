//! User-facing notices (toasts on the web, printed lines in the CLI)

use crate::error::Error;

/// How long a toast stays on screen
pub const NOTICE_DURATION_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Info => "info",
            NoticeLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn added_to_cart(name: &str) -> Self {
        Self::success(format!("Added {} to cart!", name))
    }

    pub fn duplicate_in_cart() -> Self {
        Self::info("This disc is already in your cart!")
    }

    pub fn removed_from_cart() -> Self {
        Self::info("Item removed from cart")
    }

    /// Removing an unknown key is a no-op, reported as such
    pub fn removal(removed: bool) -> Self {
        if removed {
            Self::removed_from_cart()
        } else {
            Self::info("Nothing to remove")
        }
    }

    pub fn cart_cleared() -> Self {
        Self::info("Cart cleared")
    }

    pub fn ranges_adjusted() -> Self {
        Self::info("Range values have been adjusted to maintain valid range")
    }

    pub fn exported(count: usize) -> Self {
        Self::success(format!("Exported {} discs to CSV", count))
    }

    pub fn nothing_to_export() -> Self {
        Self::error("No results to export")
    }

    pub fn copied(what: &str) -> Self {
        Self::success(format!("{} copied to clipboard!", what))
    }
}

impl From<&Error> for Notice {
    fn from(error: &Error) -> Self {
        Notice::error(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Notice::added_to_cart("Star Wraith").message, "Added Star Wraith to cart!");
        assert_eq!(Notice::duplicate_in_cart().level, NoticeLevel::Info);
        assert_eq!(Notice::exported(2).message, "Exported 2 discs to CSV");
        assert_eq!(Notice::exported(2).level, NoticeLevel::Success);
    }

    #[test]
    fn test_removal() {
        assert_eq!(Notice::removal(true).message, "Item removed from cart");
        let missing = Notice::removal(false);
        assert_eq!(missing.level, NoticeLevel::Info);
        assert_eq!(missing.message, "Nothing to remove");
    }

    #[test]
    fn test_from_error() {
        let notice = Notice::from(&Error::EmptyCart);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Your cart is empty!");
    }

    #[test]
    fn test_level_str() {
        assert_eq!(NoticeLevel::Error.as_str(), "error");
    }
}
