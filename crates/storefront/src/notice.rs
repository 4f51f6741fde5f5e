//! Transient user-facing notifications.

use serde::Serialize;

use hearthwood_core::NoticeKind;

use crate::stores::LanguageStore;

/// A toast-style message: what happened, already localized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    /// Build a notice from a translation key in the active locale.
    #[must_use]
    pub fn localized(kind: NoticeKind, key: &str, language: &LanguageStore) -> Self {
        Self {
            kind,
            message: language.t(key).to_owned(),
        }
    }

    #[must_use]
    pub fn success(key: &str, language: &LanguageStore) -> Self {
        Self::localized(NoticeKind::Success, key, language)
    }

    #[must_use]
    pub fn error(key: &str, language: &LanguageStore) -> Self {
        Self::localized(NoticeKind::Error, key, language)
    }

    #[must_use]
    pub fn info(key: &str, language: &LanguageStore) -> Self {
        Self::localized(NoticeKind::Info, key, language)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hearthwood_core::Locale;

    use super::*;
    use crate::i18n::keys;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_notice_is_localized() {
        let language = LanguageStore::hydrate(Arc::new(MemoryStorage::new()), Locale::Ru);
        let notice = Notice::info(keys::LOGGED_OUT, &language);
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(notice.message, "Вы вышли из системы");
    }
}
