//! ============================================================================
//! Catalog - Reference builds, game profiles, and guides
//! ============================================================================
//! The static product data the advisor works from. Builds are kept in
//! ascending price order; build-id and game-key lookups are map-backed.
//! ============================================================================

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::types::*;

static CATALOG: Lazy<Catalog> =
    Lazy::new(|| Catalog::new(reference_builds(), reference_games(), reference_articles()));

/// Process-wide reference catalog
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Immutable catalog with id/key indexes
#[derive(Debug)]
pub struct Catalog {
    builds: Vec<Build>,
    games: Vec<GameProfile>,
    articles: Vec<Article>,
    build_index: HashMap<BuildId, usize>,
    game_index: HashMap<String, usize>,
}

impl Catalog {
    /// Assemble a catalog from raw records, indexing builds by id and
    /// games by key. Records keep their given order.
    pub fn new(builds: Vec<Build>, games: Vec<GameProfile>, articles: Vec<Article>) -> Self {
        let build_index = builds
            .iter()
            .enumerate()
            .map(|(i, b)| (b.id, i))
            .collect();
        let game_index = games
            .iter()
            .enumerate()
            .map(|(i, g)| (g.key.clone(), i))
            .collect();

        Self {
            builds,
            games,
            articles,
            build_index,
            game_index,
        }
    }

    /// All builds in catalog order
    pub fn builds(&self) -> &[Build] {
        &self.builds
    }

    /// Look up a build by id. Ids no longer in the catalog simply miss,
    /// so stale favorites are not an error.
    pub fn build(&self, id: BuildId) -> Option<&Build> {
        self.build_index.get(&id).map(|&i| &self.builds[i])
    }

    /// All game profiles in catalog order
    pub fn games(&self) -> &[GameProfile] {
        &self.games
    }

    /// Look up a game profile by key
    pub fn game(&self, key: &str) -> Result<&GameProfile, AdvisorError> {
        self.game_index
            .get(key)
            .map(|&i| &self.games[i])
            .ok_or_else(|| AdvisorError::UnknownGame(key.to_string()))
    }

    /// Hardware guides
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// First build of the given display tier, catalog order (cheapest in
    /// the reference data)
    pub fn first_in_tier(&self, tier: BuildTier) -> Option<&Build> {
        self.builds.iter().find(|b| b.tier == tier)
    }
}

fn reference_builds() -> Vec<Build> {
    vec![
        Build {
            id: 1,
            name: "Начальный уровень".into(),
            tier: BuildTier::Entry,
            price: 45_000,
            cpu: "Intel i3-12100F".into(),
            gpu: "GTX 1650".into(),
            ram: "16GB DDR4".into(),
            storage: "500GB NVMe".into(),
            fps_label: "60 FPS в Full HD".into(),
            benchmark_fps: 60,
            vendors: vec![
                VendorLink { name: "DNS".into(), url: "#".into() },
                VendorLink { name: "Ситилинк".into(), url: "#".into() },
            ],
        },
        Build {
            id: 2,
            name: "Средний уровень".into(),
            tier: BuildTier::Mid,
            price: 85_000,
            cpu: "AMD Ryzen 5 5600X".into(),
            gpu: "RTX 4060".into(),
            ram: "32GB DDR4".into(),
            storage: "1TB NVMe".into(),
            fps_label: "100+ FPS в Full HD".into(),
            benchmark_fps: 100,
            vendors: vec![
                VendorLink { name: "DNS".into(), url: "#".into() },
                VendorLink { name: "МВидео".into(), url: "#".into() },
            ],
        },
        Build {
            id: 3,
            name: "Топовый уровень".into(),
            tier: BuildTier::High,
            price: 180_000,
            cpu: "AMD Ryzen 7 7800X3D".into(),
            gpu: "RTX 4080".into(),
            ram: "32GB DDR5".into(),
            storage: "2TB NVMe".into(),
            fps_label: "144+ FPS в 2K".into(),
            benchmark_fps: 144,
            vendors: vec![
                VendorLink { name: "DNS".into(), url: "#".into() },
                VendorLink { name: "Регард".into(), url: "#".into() },
            ],
        },
    ]
}

fn reference_games() -> Vec<GameProfile> {
    vec![
        GameProfile {
            key: "valorant".into(),
            display_name: "Valorant".into(),
            min_fps: 60,
            rec_fps: 144,
        },
        GameProfile {
            key: "csgo".into(),
            display_name: "CS:GO".into(),
            min_fps: 60,
            rec_fps: 144,
        },
        GameProfile {
            key: "cyberpunk".into(),
            display_name: "Cyberpunk 2077".into(),
            min_fps: 30,
            rec_fps: 60,
        },
        GameProfile {
            key: "rdr2".into(),
            display_name: "RDR 2".into(),
            min_fps: 30,
            rec_fps: 60,
        },
    ]
}

fn reference_articles() -> Vec<Article> {
    vec![
        Article {
            id: 1,
            title: "Как выбрать процессор для игр в 2024".into(),
            description: "Разбираем Intel vs AMD и какие модели подходят под разный бюджет"
                .into(),
            icon: "Cpu".into(),
        },
        Article {
            id: 2,
            title: "Видеокарта: на что обратить внимание".into(),
            description: "VRAM, частоты, охлаждение - всё, что нужно знать о GPU".into(),
            icon: "Monitor".into(),
        },
        Article {
            id: 3,
            title: "Оперативная память: сколько нужно геймеру".into(),
            description: "Разница между DDR4 и DDR5, частоты и тайминги".into(),
            icon: "HardDrive".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_by_id() {
        let cat = catalog();
        assert_eq!(cat.build(1).map(|b| b.gpu.as_str()), Some("GTX 1650"));
        assert_eq!(cat.build(3).map(|b| b.tier), Some(BuildTier::High));
        assert!(cat.build(999).is_none());
    }

    #[test]
    fn test_lookup_by_game_key() {
        let cat = catalog();
        let valorant = cat.game("valorant").unwrap();
        assert_eq!(valorant.display_name, "Valorant");
        assert_eq!(valorant.min_fps, 60);
        assert_eq!(valorant.rec_fps, 144);
    }

    #[test]
    fn test_unknown_game_key_is_an_error() {
        let err = catalog().game("doom").unwrap_err();
        assert_eq!(err, AdvisorError::UnknownGame("doom".to_string()));
    }

    #[test]
    fn test_first_in_tier() {
        let cat = catalog();
        assert_eq!(cat.first_in_tier(BuildTier::Entry).map(|b| b.id), Some(1));
        assert_eq!(cat.first_in_tier(BuildTier::Mid).map(|b| b.id), Some(2));
        assert_eq!(cat.first_in_tier(BuildTier::High).map(|b| b.id), Some(3));
    }

    #[test]
    fn test_reference_data_integrity() {
        let cat = catalog();
        assert!(!cat.builds().is_empty());
        assert!(!cat.games().is_empty());

        let ids: HashSet<BuildId> = cat.builds().iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), cat.builds().len(), "build ids must be unique");

        let keys: HashSet<&str> = cat.games().iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys.len(), cat.games().len(), "game keys must be unique");

        for build in cat.builds() {
            assert!(build.id > 0);
            assert!(!build.vendors.is_empty(), "every build needs a store link");
        }

        for game in cat.games() {
            assert!(game.rec_fps >= game.min_fps);
        }
    }

    #[test]
    fn test_builds_are_in_ascending_price_order() {
        let prices: Vec<u32> = catalog().builds().iter().map(|b| b.price).collect();
        let mut sorted = prices.clone();
        sorted.sort_unstable();
        assert_eq!(prices, sorted);
    }
}
