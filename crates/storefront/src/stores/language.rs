//! Active interface language.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use hearthwood_core::Locale;

use crate::i18n;
use crate::storage::{SnapshotSlot, Storage, keys};

/// Persisted form of the language store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSnapshot {
    pub language: Locale,
}

/// Holds the active locale and resolves translation keys against it.
#[derive(Debug)]
pub struct LanguageStore {
    locale: watch::Sender<Locale>,
    slot: SnapshotSlot<LanguageSnapshot>,
}

impl LanguageStore {
    /// Restore the persisted locale, or start from `default`.
    #[must_use]
    pub fn hydrate(storage: Arc<dyn Storage>, default: Locale) -> Self {
        let slot = SnapshotSlot::new(storage, keys::LANGUAGE);
        let locale = slot.load().map_or(default, |snapshot: LanguageSnapshot| snapshot.language);
        tracing::debug!(%locale, "Language store hydrated");

        Self {
            locale: watch::Sender::new(locale),
            slot,
        }
    }

    /// The active locale.
    #[must_use]
    pub fn locale(&self) -> Locale {
        *self.locale.borrow()
    }

    /// Switch the active locale and persist it. Subscribers are only
    /// notified when the locale actually changes.
    pub fn set_locale(&self, locale: Locale) {
        let changed = self.locale.send_if_modified(|current| {
            if *current == locale {
                return false;
            }
            *current = locale;
            true
        });

        if changed {
            tracing::info!(%locale, "Locale changed");
            self.slot.save(&LanguageSnapshot { language: locale });
        }
    }

    /// Translate `key` for the active locale, falling back to the key.
    #[must_use]
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        i18n::translate_or_key(self.locale(), key)
    }

    /// Receive locale changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Locale> {
        self.locale.subscribe()
    }
}
