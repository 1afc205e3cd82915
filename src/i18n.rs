//! Static text packs for the two supported reply languages.

use std::fmt;
use std::str::FromStr;

use crate::error::BanscopeError;

/// A reply language a user can select with `!lang`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    /// Every selectable language, in the order they are advertised.
    pub const ALL: [Language; 2] = [Language::En, Language::Fr];

    /// The lowercase code users type to select this language.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// Confirmation sent after a successful `!lang`, in the newly selected language.
    pub fn confirmation(self) -> &'static str {
        match self {
            Language::En => "✅ Language set to English.",
            Language::Fr => "✅ Langue définie sur le français.",
        }
    }

    pub fn invalid_uid(self) -> &'static str {
        match self {
            Language::En => "❌ **Invalid UID!**",
            Language::Fr => "❌ **UID invalide !**",
        }
    }

    pub fn lookup_failed(self) -> &'static str {
        match self {
            Language::En => "❌ Could not get information. Please try again later.",
            Language::Fr => {
                "❌ Impossible d'obtenir les informations. Veuillez réessayer plus tard."
            }
        }
    }

    pub fn banned_title(self) -> &'static str {
        match self {
            Language::En => "**▌ Banned Account 🛑 **",
            Language::Fr => "**▌ Compte banni 🛑 **",
        }
    }

    pub fn clean_title(self) -> &'static str {
        match self {
            Language::En => "**▌ Clean Account ✅ **",
            Language::Fr => "**▌ Compte non banni ✅ **",
        }
    }

    pub fn reason_label(self) -> &'static str {
        match self {
            Language::En => "Reason",
            Language::Fr => "Raison",
        }
    }

    pub fn status_label(self) -> &'static str {
        match self {
            Language::En => "Status",
            Language::Fr => "Statut",
        }
    }

    pub fn nickname_label(self) -> &'static str {
        match self {
            Language::En => "Nickname",
            Language::Fr => "Pseudo",
        }
    }

    pub fn region_label(self) -> &'static str {
        match self {
            Language::En => "Region",
            Language::Fr => "Région",
        }
    }

    pub fn period_label(self) -> &'static str {
        match self {
            Language::En => "Ban period",
            Language::Fr => "Durée du bannissement",
        }
    }

    /// Unit used for the generic "<N> months" ban period.
    pub fn months_unit(self) -> &'static str {
        match self {
            Language::En => "months",
            Language::Fr => "mois",
        }
    }

    pub fn over_six_months(self) -> &'static str {
        match self {
            Language::En => "Banned for more than 6 months",
            Language::Fr => "Ce compte est banni depuis plus de 6 mois",
        }
    }
}

/// Sent for an unknown `!lang` code. Not localized: the caller has no valid choice yet.
pub fn invalid_language() -> String {
    let codes: Vec<String> = Language::ALL
        .iter()
        .map(|lang| format!("`{}`", lang.code()))
        .collect();
    format!("❌ Invalid language. Available: {}", codes.join(", "))
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = BanscopeError;

    /// Parse a language code, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            other => Err(BanscopeError::Validation(format!(
                "Unsupported language code: '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("FR".parse::<Language>().unwrap(), Language::Fr);
        assert_eq!("Fr".parse::<Language>().unwrap(), Language::Fr);

        assert!("de".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
        assert!("english".parse::<Language>().is_err());
    }

    #[test]
    fn test_invalid_language_lists_codes() {
        assert_eq!(invalid_language(), "❌ Invalid language. Available: `en`, `fr`");
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }
}
