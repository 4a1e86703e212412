//! Static icon catalog.
//!
//! Glyphs are drawn on a 24x24 stroke grid in the Lucide style and looked up
//! by their PascalCase identifier.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Path(&'static str),
    Circle {
        cx: &'static str,
        cy: &'static str,
        r: &'static str,
    },
    Rect {
        x: &'static str,
        y: &'static str,
        width: &'static str,
        height: &'static str,
        rx: &'static str,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconGlyph {
    ArrowRight,
    BarChart3,
    BookOpen,
    CheckCircle,
    Coins,
    Github,
    Globe,
    HelpCircle,
    Hexagon,
    Linkedin,
    Lock,
    Menu,
    MessageCircle,
    Percent,
    Repeat,
    Send,
    Shield,
    ShieldCheck,
    TrendingUp,
    Twitter,
    Users,
    Wallet,
    X,
    Zap,
}

/// Glyph used whenever a name is not in the catalog.
pub const FALLBACK: IconGlyph = IconGlyph::HelpCircle;

const SHIELD_OUTLINE: &str = "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10";

impl IconGlyph {
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        let glyph = match identifier {
            "ArrowRight" => IconGlyph::ArrowRight,
            "BarChart3" => IconGlyph::BarChart3,
            "BookOpen" => IconGlyph::BookOpen,
            "CheckCircle" => IconGlyph::CheckCircle,
            "Coins" => IconGlyph::Coins,
            "Github" => IconGlyph::Github,
            "Globe" => IconGlyph::Globe,
            "HelpCircle" => IconGlyph::HelpCircle,
            "Hexagon" => IconGlyph::Hexagon,
            "Linkedin" => IconGlyph::Linkedin,
            "Lock" => IconGlyph::Lock,
            "Menu" => IconGlyph::Menu,
            "MessageCircle" => IconGlyph::MessageCircle,
            "Percent" => IconGlyph::Percent,
            "Repeat" => IconGlyph::Repeat,
            "Send" => IconGlyph::Send,
            "Shield" => IconGlyph::Shield,
            "ShieldCheck" => IconGlyph::ShieldCheck,
            "TrendingUp" => IconGlyph::TrendingUp,
            "Twitter" => IconGlyph::Twitter,
            "Users" => IconGlyph::Users,
            "Wallet" => IconGlyph::Wallet,
            "X" => IconGlyph::X,
            "Zap" => IconGlyph::Zap,
            _ => return None,
        };
        Some(glyph)
    }

    pub fn shapes(self) -> &'static [Shape] {
        use Shape::*;
        match self {
            IconGlyph::ArrowRight => &[Path("M5 12h14"), Path("m12 5 7 7-7 7")],
            IconGlyph::BarChart3 => &[
                Path("M3 3v18h18"),
                Path("M18 17V9"),
                Path("M13 17V5"),
                Path("M8 17v-3"),
            ],
            IconGlyph::BookOpen => &[
                Path("M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"),
                Path("M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"),
            ],
            IconGlyph::CheckCircle => &[
                Path("M22 11.08V12a10 10 0 1 1-5.93-9.14"),
                Path("m9 11 3 3L22 4"),
            ],
            IconGlyph::Coins => &[
                Circle { cx: "8", cy: "8", r: "6" },
                Path("M18.09 10.37A6 6 0 1 1 10.34 18"),
                Path("M7 6h1v4"),
                Path("m16.71 13.88.7.71-2.82 2.82"),
            ],
            IconGlyph::Github => &[
                Path("M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"),
                Path("M9 18c-4.51 2-5-2-7-2"),
            ],
            IconGlyph::Globe => &[
                Circle { cx: "12", cy: "12", r: "10" },
                Path("M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"),
                Path("M2 12h20"),
            ],
            IconGlyph::HelpCircle => &[
                Circle { cx: "12", cy: "12", r: "10" },
                Path("M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"),
                Path("M12 17h.01"),
            ],
            IconGlyph::Hexagon => &[Path(
                "M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z",
            )],
            IconGlyph::Linkedin => &[
                Path("M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"),
                Rect { x: "2", y: "9", width: "4", height: "12", rx: "0" },
                Circle { cx: "4", cy: "4", r: "2" },
            ],
            IconGlyph::Lock => &[
                Rect { x: "3", y: "11", width: "18", height: "11", rx: "2" },
                Path("M7 11V7a5 5 0 0 1 10 0v4"),
            ],
            IconGlyph::Menu => &[Path("M4 6h16"), Path("M4 12h16"), Path("M4 18h16")],
            IconGlyph::MessageCircle => &[Path("M7.9 20A9 9 0 1 0 4 16.1L2 22Z")],
            IconGlyph::Percent => &[
                Path("M19 5 5 19"),
                Circle { cx: "6.5", cy: "6.5", r: "2.5" },
                Circle { cx: "17.5", cy: "17.5", r: "2.5" },
            ],
            IconGlyph::Repeat => &[
                Path("m17 2 4 4-4 4"),
                Path("M3 11v-1a4 4 0 0 1 4-4h14"),
                Path("m7 22-4-4 4-4"),
                Path("M21 13v1a4 4 0 0 1-4 4H3"),
            ],
            IconGlyph::Send => &[Path("m22 2-7 20-4-9-9-4Z"), Path("M22 2 11 13")],
            IconGlyph::Shield => &[Path(SHIELD_OUTLINE)],
            IconGlyph::ShieldCheck => &[Path(SHIELD_OUTLINE), Path("m9 12 2 2 4-4")],
            IconGlyph::TrendingUp => &[Path("M22 7l-8.5 8.5-5-5L2 17"), Path("M16 7h6v6")],
            IconGlyph::Twitter => &[Path(
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            )],
            IconGlyph::Users => &[
                Path("M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"),
                Circle { cx: "9", cy: "7", r: "4" },
                Path("M22 21v-2a4 4 0 0 0-3-3.87"),
                Path("M16 3.13a4 4 0 0 1 0 7.75"),
            ],
            IconGlyph::Wallet => &[
                Path("M21 12V7H5a2 2 0 0 1 0-4h14v4"),
                Path("M3 5v14a2 2 0 0 0 2 2h16v-5"),
                Path("M18 12a2 2 0 0 0 0 4h4v-4Z"),
            ],
            IconGlyph::X => &[Path("M18 6 6 18"), Path("m6 6 12 12")],
            IconGlyph::Zap => &[Path("M13 2 3 14h9l-1 8 10-12h-9l1-8z")],
        }
    }
}

/// Converts a kebab-case icon name into the catalog's PascalCase identifier.
pub fn to_identifier(name: &str) -> String {
    name.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Looks up `name` in the catalog, falling back to [`FALLBACK`] on a miss.
pub fn resolve(name: &str) -> IconGlyph {
    let identifier = to_identifier(name);
    IconGlyph::from_identifier(&identifier).unwrap_or_else(|| {
        log::debug!("icon {:?} ({}) not in catalog, using fallback", name, identifier);
        FALLBACK
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_kebab_case_to_pascal_case() {
        assert_eq!(to_identifier("arrow-right"), "ArrowRight");
        assert_eq!(to_identifier("bar-chart-3"), "BarChart3");
        assert_eq!(to_identifier("x"), "X");
        assert_eq!(to_identifier("message-circle"), "MessageCircle");
    }

    #[test]
    fn keeps_the_tail_of_each_segment_untouched() {
        assert_eq!(to_identifier("gitHub-repo"), "GitHubRepo");
        assert_eq!(to_identifier("a--b"), "AB");
        assert_eq!(to_identifier(""), "");
    }

    #[test]
    fn resolves_known_names() {
        assert_eq!(resolve("arrow-right"), IconGlyph::ArrowRight);
        assert_eq!(resolve("shield-check"), IconGlyph::ShieldCheck);
        assert_eq!(resolve("bar-chart-3"), IconGlyph::BarChart3);
        assert_eq!(resolve("menu"), IconGlyph::Menu);
    }

    #[test]
    fn unknown_names_fall_back_to_help_circle() {
        assert_eq!(resolve("does-not-exist"), IconGlyph::HelpCircle);
        assert_eq!(resolve(""), IconGlyph::HelpCircle);
        // only the first letter of a segment is raised
        assert_eq!(resolve("ArrowRight"), IconGlyph::ArrowRight);
        assert_eq!(resolve("arrowright"), IconGlyph::HelpCircle);
    }

    #[test]
    fn every_glyph_has_shapes() {
        let all = [
            "ArrowRight", "BarChart3", "BookOpen", "CheckCircle", "Coins", "Github", "Globe",
            "HelpCircle", "Hexagon", "Linkedin", "Lock", "Menu", "MessageCircle", "Percent",
            "Repeat", "Send", "Shield", "ShieldCheck", "TrendingUp", "Twitter", "Users",
            "Wallet", "X", "Zap",
        ];
        for identifier in all {
            let glyph = IconGlyph::from_identifier(identifier)
                .unwrap_or_else(|| panic!("{} missing from catalog", identifier));
            assert!(!glyph.shapes().is_empty(), "{} has no shapes", identifier);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod properties {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn identifiers_never_contain_dashes(name in "[a-z0-9-]{0,24}") {
                prop_assert!(!to_identifier(&name).contains('-'));
            }

            #[test]
            fn names_with_digits_only_segments_miss(name in "[0-9]{1,4}(-[0-9]{1,4}){0,3}") {
                prop_assert_eq!(resolve(&name), FALLBACK);
            }

            #[test]
            fn resolution_is_total(name in ".{0,32}") {
                let glyph = resolve(&name);
                prop_assert!(!glyph.shapes().is_empty());
            }
        }
    }
}
