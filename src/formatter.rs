//! Rendering of account status lookups into Discord embeds.

use serenity::all::{ChannelId, Colour, CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::i18n::Language;
use crate::status_api::AccountStatus;

pub const BANNED_COLOR: u32 = 0xFF0000;
pub const CLEAN_COLOR: u32 = 0x00FF00;

pub const BANNED_IMAGE_URL: &str = "https://i.ibb.co/P7GwMDd/BANNED.png";
pub const CLEAN_IMAGE_URL: &str = "https://i.ibb.co/Z1KYSWp5/NOT-BANNED.png";

pub const FOOTER_TEXT: &str = "📌 Garena Free Fire";

// Verdict phrases are shown verbatim in both languages; only the labels are translated.
const BANNED_REASON: &str = "This account used cheats.";
const CLEAN_VERDICT: &str = "No evidence of cheats.";

/// Who ran the command, as far as the reply needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoker {
    pub user_id: u64,
    /// Avatar URL, or Discord's default avatar when the user has none set
    pub avatar_url: String,
}

impl Invoker {
    pub fn mention(&self) -> String {
        format!("<@{}>", self.user_id)
    }
}

/// A fully rendered status reply, independent of the Discord builder types.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusCard {
    pub color: u32,
    pub title: String,
    pub description: String,
    pub image_url: &'static str,
    /// Localized ban period as (label, value); only present for banned accounts
    pub period: Option<(&'static str, String)>,
    pub footer: &'static str,
    pub thumbnail_url: String,
    pub timestamp: Timestamp,
}

impl StatusCard {
    pub fn to_embed(&self) -> CreateEmbed {
        let mut embed = CreateEmbed::new()
            .colour(Colour::new(self.color))
            .title(&self.title)
            .description(&self.description)
            .image(self.image_url)
            .footer(CreateEmbedFooter::new(self.footer))
            .thumbnail(&self.thumbnail_url)
            .timestamp(self.timestamp);

        if let Some((label, value)) = &self.period {
            embed = embed.field(*label, value, false);
        }

        embed
    }
}

/// Human readable ban duration for a provider period code.
///
/// Codes 1, 2, 3 and 6 have fixed phrases, anything above 6 collapses into a
/// single "more than 6 months" phrase, everything else is printed literally.
pub fn period_text(code: i64, lang: Language) -> String {
    match (code, lang) {
        (1, Language::En) => "1 month".to_string(),
        (1, Language::Fr) => "1 mois".to_string(),
        (2 | 3 | 6, _) => format!("{} {}", code, lang.months_unit()),
        (c, _) if c > 6 => lang.over_six_months().to_string(),
        (c, _) => format!("{} {}", c, lang.months_unit()),
    }
}

/// Build the reply card for a successful lookup.
///
/// `timestamp` is the creation time of the invoking message.
pub fn render_status(
    status: &AccountStatus,
    lang: Language,
    invoker: &Invoker,
    timestamp: Timestamp,
) -> StatusCard {
    let (color, title, first_line, image_url) = if status.is_banned {
        (
            BANNED_COLOR,
            lang.banned_title(),
            format!("**• {}:** {}", lang.reason_label(), BANNED_REASON),
            BANNED_IMAGE_URL,
        )
    } else {
        (
            CLEAN_COLOR,
            lang.clean_title(),
            format!("**• {}:** {}", lang.status_label(), CLEAN_VERDICT),
            CLEAN_IMAGE_URL,
        )
    };

    let period = status
        .is_banned
        .then(|| (lang.period_label(), period_text(status.period, lang)));

    let description = format!(
        "{}\n**• {}:** {}\n**• {}:** {}",
        first_line,
        lang.nickname_label(),
        status.nickname,
        lang.region_label(),
        status.region
    );

    StatusCard {
        color,
        title: title.to_string(),
        description,
        image_url,
        period,
        footer: FOOTER_TEXT,
        thumbnail_url: invoker.avatar_url.clone(),
        timestamp,
    }
}

/// Embed sent when `!ID` is used outside the allowed channel.
pub fn not_allowed_embed(allowed_channel: ChannelId) -> CreateEmbed {
    CreateEmbed::new()
        .colour(Colour::new(BANNED_COLOR))
        .title("⚠️ Command Not Allowed")
        .description(not_allowed_description(allowed_channel))
}

pub fn not_allowed_description(allowed_channel: ChannelId) -> String {
    format!("This command is only allowed in <#{}>", allowed_channel.get())
}
