use owo_colors::Style;
use std::sync::OnceLock;
use crate::model::Table;

static THEME: OnceLock<Theme> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub success: Style,
    pub warn: Style,
    pub dim: Style,
    pub muted: Style,
    /// One colour per summary tile: providers, receivers, listings, claims
    pub tiles: [Style; 4],
}

impl Theme {
    pub fn detect() -> Self {
        if !console::Term::stdout().is_term() {
            return Self::plain();
        }
        Self::colored()
    }

    pub fn colored() -> Self {
        Self {
            header: Style::new().cyan().bold(),
            success: Style::new().green().bold(),
            warn: Style::new().yellow().bold(),
            dim: Style::new().white().dimmed(),
            muted: Style::new().bright_black(),
            tiles: [
                Style::new().truecolor(0x1a, 0xbc, 0x9c).bold(),
                Style::new().truecolor(0x34, 0x98, 0xdb).bold(),
                Style::new().truecolor(0xe6, 0x7e, 0x22).bold(),
                Style::new().truecolor(0x9b, 0x59, 0xb6).bold(),
            ],
        }
    }

    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            success: Style::new(),
            warn: Style::new(),
            dim: Style::new(),
            muted: Style::new(),
            tiles: [Style::new(), Style::new(), Style::new(), Style::new()],
        }
    }

    pub fn tile(&self, table: Table) -> Style {
        match table {
            Table::Providers => self.tiles[0].clone(),
            Table::Receivers => self.tiles[1].clone(),
            Table::FoodListings => self.tiles[2].clone(),
            Table::Claims => self.tiles[3].clone(),
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}
