//! ============================================================================
//! Intent Responder - Rule-based chat replies
//! ============================================================================
//! Turns a free-text user utterance into advice. Three rules are evaluated
//! in priority order against the lower-cased utterance:
//!   1. budget figure present -> tier recommendation from the catalog
//!   2. game keyword present  -> esports vs AAA guidance
//!   3. otherwise             -> prompt for budget and titles
//! The responder holds no conversation state; history belongs to the caller.
//! ============================================================================

use tracing::debug;

use crate::catalog::Catalog;
use crate::types::{format_price, BuildTier, ChatTurn};

/// Substrings that mark an utterance as being about games
const GAME_KEYWORDS: &[&str] = &["игр"];

/// Recommended frame rate that separates esports titles from AAA titles
const ESPORTS_REC_FPS: u32 = 144;

/// Opening line shown before the first user message
const GREETING: &str = "Привет! Я помогу подобрать идеальную сборку ПК. Какой у тебя бюджет?";

/// Budget thresholds separating entry/mid/high advice (rubles)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetBreakpoints {
    /// Budgets at or above this read as mid-range
    pub mid_from: u64,
    /// Budgets at or above this read as high-end
    pub high_from: u64,
}

impl BudgetBreakpoints {
    /// Fixed thresholds the advice used before breakpoints were derived
    /// from catalog prices
    pub const LEGACY: Self = Self {
        mid_from: 50_000,
        high_from: 100_000,
    };

    /// Derive breakpoints from the catalog: each threshold sits halfway
    /// between adjacent tier prices, so the advice points at whichever
    /// build is nearest and tracks catalog edits. Falls back to LEGACY
    /// when a tier has no build.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let price_of = |tier| {
            catalog
                .first_in_tier(tier)
                .map(|b| u64::from(b.price))
        };

        match (
            price_of(BuildTier::Entry),
            price_of(BuildTier::Mid),
            price_of(BuildTier::High),
        ) {
            (Some(entry), Some(mid), Some(high)) => Self {
                mid_from: (entry + mid) / 2,
                high_from: (mid + high) / 2,
            },
            _ => Self::LEGACY,
        }
    }

    /// Which display tier a stated budget points at
    pub fn tier_for(&self, budget_rub: u64) -> BuildTier {
        match budget_rub {
            x if x >= self.high_from => BuildTier::High,
            x if x >= self.mid_from => BuildTier::Mid,
            _ => BuildTier::Entry,
        }
    }
}

/// Stateless reply generator over a catalog
pub struct Responder<'a> {
    catalog: &'a Catalog,
    breakpoints: BudgetBreakpoints,
}

impl<'a> Responder<'a> {
    /// Create a responder with breakpoints derived from the catalog
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            breakpoints: BudgetBreakpoints::from_catalog(catalog),
            catalog,
        }
    }

    /// Create a responder with explicit breakpoints
    pub fn with_breakpoints(catalog: &'a Catalog, breakpoints: BudgetBreakpoints) -> Self {
        Self {
            catalog,
            breakpoints,
        }
    }

    /// Breakpoints in effect
    pub fn breakpoints(&self) -> BudgetBreakpoints {
        self.breakpoints
    }

    /// Opening line for a fresh conversation
    pub fn greeting(&self) -> &'static str {
        GREETING
    }

    /// Produce a reply to the latest user utterance. History is accepted
    /// for future rules; the current ones look only at the utterance.
    pub fn respond(&self, utterance: &str, _history: &[ChatTurn]) -> String {
        let lower = utterance.to_lowercase();

        if let Some(budget) = extract_budget(&lower) {
            debug!("Budget rule matched: {} rubles", budget);
            return self.budget_reply(budget);
        }

        if GAME_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            debug!("Game keyword rule matched");
            return self.games_reply();
        }

        debug!("No rule matched, prompting for details");
        self.fallback_reply()
    }

    /// Recommend the build whose tier the stated budget points at
    fn budget_reply(&self, budget_rub: u64) -> String {
        let tier = self.breakpoints.tier_for(budget_rub);
        let build = match self.catalog.first_in_tier(tier) {
            Some(b) => b,
            None => return self.fallback_reply(),
        };

        match tier {
            BuildTier::Entry => format!(
                "Для такого бюджета подойдёт сборка «{}» за {} с {} и {}. \
                 Она потянет большинство игр в Full HD на средних настройках!",
                build.name,
                format_price(build.price),
                build.cpu,
                build.gpu
            ),
            BuildTier::Mid => format!(
                "С таким бюджетом рекомендую сборку «{}» за {} на {} и {}. \
                 Отличное соотношение цена/качество для 1080p!",
                build.name,
                format_price(build.price),
                build.cpu,
                build.gpu
            ),
            BuildTier::High => format!(
                "При таком бюджете можно взять сборку «{}» за {}! {} + {} = \
                 ультра настройки в 2K с высоким FPS.",
                build.name,
                format_price(build.price),
                build.cpu,
                build.gpu
            ),
        }
    }

    /// Esports vs AAA guidance, with title lists taken from the catalog
    fn games_reply(&self) -> String {
        let esports: Vec<&str> = self
            .catalog
            .games()
            .iter()
            .filter(|g| g.rec_fps >= ESPORTS_REC_FPS)
            .map(|g| g.display_name.as_str())
            .collect();
        let aaa: Vec<&str> = self
            .catalog
            .games()
            .iter()
            .filter(|g| g.rec_fps < ESPORTS_REC_FPS)
            .map(|g| g.display_name.as_str())
            .collect();

        format!(
            "Для онлайн-игр ({}) важны высокие FPS - от {}. \
             Для AAA-игр ({}) нужна мощная видеокарта. Какие игры планируешь?",
            esports.join(", "),
            ESPORTS_REC_FPS,
            aaa.join(", ")
        )
    }

    /// Ask for both a budget and target titles
    fn fallback_reply(&self) -> String {
        let example = self
            .catalog
            .games()
            .first()
            .map(|g| g.display_name.as_str())
            .unwrap_or("Valorant");

        format!(
            "Чтобы помочь точнее, расскажи: какой у тебя бюджет и в какие игры \
             хочешь играть? Например: \"У меня 80 тысяч, играю в {}\"",
            example
        )
    }
}

/// First maximal run of decimal digits in the text. The run is folded with
/// saturating arithmetic, so an absurdly long figure reads as a very large
/// budget instead of failing.
fn extract_budget(text: &str) -> Option<u64> {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return None;
    }

    Some(digits.chars().fold(0u64, |acc, c| {
        acc.saturating_mul(10)
            .saturating_add(u64::from(c) - u64::from('0'))
    }))
}
