//! User-facing notifications emitted by cart transitions.
//!
//! Notices are informational: they never signal an error and a notifier can
//! never fail a transition.

use crate::format::format_brl;

/// Severity shown by the UI toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
}

/// Notification produced by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// A new vehicle was appended.
    Added { name: String },
    /// The vehicle was already in the cart and its entry was replaced.
    Duplicate { name: String },
    /// A vehicle was removed.
    Removed { name: String },
    /// A non-empty cart was cleared.
    Cleared { count: usize },
    /// Checkout completed and the cart was emptied.
    OrderPlaced { total: f64, item_count: usize },
}

impl Notice {
    pub fn level(&self) -> NoticeLevel {
        match self {
            Notice::Added { .. } | Notice::OrderPlaced { .. } => NoticeLevel::Success,
            Notice::Duplicate { .. } | Notice::Removed { .. } | Notice::Cleared { .. } => {
                NoticeLevel::Info
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::Added { name } => format!("{name} adicionado ao carrinho!"),
            Notice::Duplicate { name } => format!("{name} já está no carrinho"),
            Notice::Removed { name } => format!("{name} removido do carrinho"),
            Notice::Cleared { count: 1 } => "1 veículo removido do carrinho".to_string(),
            Notice::Cleared { count } => {
                format!("{} removidos do carrinho", vehicles(*count))
            }
            Notice::OrderPlaced { total, item_count } => format!(
                "Pagamento aprovado! {} por {}",
                vehicles(*item_count),
                format_brl(*total)
            ),
        }
    }
}

fn vehicles(count: usize) -> String {
    if count == 1 {
        "1 veículo".to_string()
    } else {
        format!("{count} veículos")
    }
}

/// Sink for notices (the UI toast seam).
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Notifier that only writes notices to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        tracing::info!(kind = ?notice.level(), "{}", notice.message());
    }
}

impl<F> Notifier for F
where
    F: Fn(&Notice),
{
    fn notify(&self, notice: &Notice) {
        self(notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_message_counts_vehicles() {
        assert!(Notice::Cleared { count: 2 }.message().contains("2 veículos"));
        assert_eq!(
            Notice::Cleared { count: 1 }.message(),
            "1 veículo removido do carrinho"
        );
    }

    #[test]
    fn levels_are_never_errors() {
        let added = Notice::Added {
            name: "Civic".to_string(),
        };
        let dup = Notice::Duplicate {
            name: "Civic".to_string(),
        };
        assert_eq!(added.level(), NoticeLevel::Success);
        assert_eq!(dup.level(), NoticeLevel::Info);
    }

    #[test]
    fn order_placed_message_shows_total() {
        let notice = Notice::OrderPlaced {
            total: 120_000.0,
            item_count: 2,
        };
        assert_eq!(
            notice.message(),
            "Pagamento aprovado! 2 veículos por R$ 120.000,00"
        );
    }
}
