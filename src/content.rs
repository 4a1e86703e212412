pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub struct Badge {
    pub icon: &'static str,
    pub label: &'static str,
}

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Gradient class for the icon tile.
    pub accent: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub social: &'static str,
}

pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

pub const BRAND: &str = "Nexus";

// Icons placed directly in section markup rather than in the content arrays.
pub const BRAND_ICON: &str = "hexagon";
pub const MENU_ICON: &str = "menu";
pub const MENU_CLOSE_ICON: &str = "x";
pub const HERO_TAG_ICON: &str = "zap";
pub const PROCEED_ICON: &str = "arrow-right";
pub const DOCS_ICON: &str = "book-open";
pub const PERK_ICON: &str = "check-circle";
pub const TEAM_SHARED_SOCIAL: &str = "twitter";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#about", label: "О протоколе" },
    NavLink { href: "#features", label: "Преимущества" },
    NavLink { href: "#stats", label: "Статистика" },
    NavLink { href: "#team", label: "Команда" },
];

pub const HERO_BADGES: &[Badge] = &[
    Badge { icon: "shield-check", label: "Аудит безопасности" },
    Badge { icon: "lock", label: "Не требует KYC" },
    Badge { icon: "globe", label: "Децентрализовано" },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "shield",
        title: "Безопасность",
        description: "Многоуровневая система защиты с аудитом от ведущих компаний. Ваши средства под надёжной защитой.",
        accent: "accent-green",
    },
    Feature {
        icon: "zap",
        title: "Мгновенные свопы",
        description: "Обменивайте токены за доли секунды благодаря оптимизированной архитектуре и layer-2 решениям.",
        accent: "accent-orange",
    },
    Feature {
        icon: "trending-up",
        title: "Высокая доходность",
        description: "Получайте до 15% APY на стейкинг и участвуйте в программах ликвидности с бонусами.",
        accent: "accent-cyan",
    },
    Feature {
        icon: "users",
        title: "DAO Governance",
        description: "Управляйте протоколом через децентрализованную автономную организацию. Голосуйте за изменения.",
        accent: "accent-purple",
    },
    Feature {
        icon: "wallet",
        title: "Мультичейн",
        description: "Поддержка Ethereum, BSC, Polygon, Arbitrum и других сетей. Мосты между блокчейнами.",
        accent: "accent-indigo",
    },
    Feature {
        icon: "coins",
        title: "Низкие комиссии",
        description: "Минимальные gas costs благодаря оптимизации смарт-контрактов и интеграции с layer-2.",
        accent: "accent-rose",
    },
];

pub const STATS: &[Stat] = &[
    Stat { value: "$2.4B+", label: "Общий объём", icon: "bar-chart-3" },
    Stat { value: "150K+", label: "Пользователей", icon: "users" },
    Stat { value: "45M+", label: "Транзакций", icon: "repeat" },
    Stat { value: "0.1%", label: "Минимальная комиссия", icon: "percent" },
];

pub const STEPS: &[Step] = &[
    Step {
        number: "01",
        title: "Подключите кошелёк",
        description: "Поддерживаем MetaMask, WalletConnect, Coinbase Wallet и другие популярные кошельки",
        icon: "wallet",
    },
    Step {
        number: "02",
        title: "Выберите актив",
        description: "Выберите токены для обмена или пула ликвидности из поддерживаемых активов",
        icon: "coins",
    },
    Step {
        number: "03",
        title: "Начните зарабатывать",
        description: "Получайте пассивный доход от стейкинга и предоставления ликвидности",
        icon: "trending-up",
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Алексей Волков",
        role: "CEO & Founder",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop",
        social: "twitter",
    },
    TeamMember {
        name: "Мария Соколова",
        role: "CTO",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400&h=400&fit=crop",
        social: "github",
    },
    TeamMember {
        name: "Дмитрий Козлов",
        role: "Head of DeFi",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400&h=400&fit=crop",
        social: "linkedin",
    },
    TeamMember {
        name: "Анна Морозова",
        role: "Lead Developer",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&h=400&fit=crop",
        social: "github",
    },
];

pub const CTA_PERKS: &[&str] = &["Без скрытых комиссий", "Мгновенный вывод", "Поддержка 24/7"];

pub const FOOTER_SOCIALS: &[&str] = &["twitter", "github", "send", "message-circle"];

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Продукт",
        links: &["Обмен", "Пулы ликвидности", "Стейкинг", "Фарминг"],
    },
    FooterColumn {
        title: "Ресурсы",
        links: &["Документация", "Whitepaper", "GitHub", "API"],
    },
];

pub const FOOTER_LEGAL: &[&str] = &["Политика конфиденциальности", "Условия использования"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::{to_identifier, IconGlyph};

    fn all_icon_names() -> Vec<&'static str> {
        let mut names = vec![
            BRAND_ICON,
            MENU_ICON,
            MENU_CLOSE_ICON,
            HERO_TAG_ICON,
            PROCEED_ICON,
            DOCS_ICON,
            PERK_ICON,
            TEAM_SHARED_SOCIAL,
        ];
        names.extend(HERO_BADGES.iter().map(|b| b.icon));
        names.extend(FEATURES.iter().map(|f| f.icon));
        names.extend(STATS.iter().map(|s| s.icon));
        names.extend(STEPS.iter().map(|s| s.icon));
        names.extend(TEAM.iter().map(|m| m.social));
        names.extend(FOOTER_SOCIALS.iter().copied());
        names
    }

    #[test]
    fn every_icon_on_the_page_is_in_the_catalog() {
        for name in all_icon_names() {
            assert!(
                IconGlyph::from_identifier(&to_identifier(name)).is_some(),
                "{} would render the fallback glyph",
                name
            );
        }
    }

    #[test]
    fn sections_take_inline_icon_names_from_content() {
        let sources = [
            ("components/navigation.rs", include_str!("components/navigation.rs")),
            ("sections/hero.rs", include_str!("sections/hero.rs")),
            ("sections/features.rs", include_str!("sections/features.rs")),
            ("sections/stats.rs", include_str!("sections/stats.rs")),
            ("sections/how_it_works.rs", include_str!("sections/how_it_works.rs")),
            ("sections/team.rs", include_str!("sections/team.rs")),
            ("sections/cta.rs", include_str!("sections/cta.rs")),
            ("sections/footer.rs", include_str!("sections/footer.rs")),
        ];
        let literal = concat!("<Icon name=", "\"");
        for (path, source) in sources {
            assert!(!source.contains(literal), "{} names an icon inline", path);
        }
    }

    #[test]
    fn nav_links_are_fragments() {
        for link in NAV_LINKS {
            assert!(link.href.starts_with('#') && link.href.len() > 1, "{}", link.href);
        }
    }

    #[test]
    fn section_sizes_match_layout() {
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(STATS.len(), 4);
        assert_eq!(STEPS.len(), 3);
        assert_eq!(TEAM.len(), 4);
    }
}
