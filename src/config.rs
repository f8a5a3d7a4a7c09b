//! src/config.rs
//!
//! Réglages (natif + web) et options de ligne de commande (natif seulement).

/// Durée par défaut de l’effet de fête.
pub const DUREE_FETE_MS: u64 = 3000;

#[derive(Clone, Debug)]
pub struct Reglages {
    pub duree_fete_ms: u64,
    pub theme_sombre: bool,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            duree_fete_ms: DUREE_FETE_MS,
            theme_sombre: true,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use natif::Options;

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use clap::Parser;

    use super::{Reglages, DUREE_FETE_MS};

    #[derive(Parser, Debug)]
    #[command(name = "calculatrice_touches", version, about = "Calculatrice à touches (egui)")]
    pub struct Options {
        /// Durée de l’effet de fête, en millisecondes
        #[arg(long = "duree-fete", value_name = "MS", default_value_t = DUREE_FETE_MS)]
        pub duree_fete_ms: u64,

        /// Démarrer en thème clair
        #[arg(long)]
        pub clair: bool,

        /// Journal détaillé (équivaut à RUST_LOG=debug si RUST_LOG est absent)
        #[arg(short, long)]
        pub verbeux: bool,

        /// Sans fenêtre : joue ces touches puis affiche le résultat et l’historique
        #[arg(long, value_name = "LIBELLÉ", num_args = 1.., allow_hyphen_values = true)]
        pub rejouer: Option<Vec<String>>,
    }

    impl Options {
        pub fn reglages(&self) -> Reglages {
            Reglages {
                duree_fete_ms: self.duree_fete_ms,
                theme_sombre: !self.clair,
            }
        }
    }
}
