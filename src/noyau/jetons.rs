// src/noyau/jetons.rs
//
// Jetons d’entrée (une touche = un jeton)
// --------------------------------------
// La conversion libellé -> Touche se fait UNE fois, à la frontière (vue / rejeu).
// Ensuite le noyau ne compare plus jamais de chaînes brutes.

use super::erreur::ErreurCalc;

/// Opérateur binaire en attente.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operateur {
    /// Symbole tel qu’écrit sur la touche (et dans l’historique).
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Add => "+",
            Operateur::Sub => "-",
            Operateur::Mul => "*",
            Operateur::Div => "÷",
        }
    }

    fn depuis_symbole(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Operateur::Add),
            "-" => Some(Operateur::Sub),
            "*" => Some(Operateur::Mul),
            "÷" => Some(Operateur::Div),
            _ => None,
        }
    }
}

/// Fonctions à un argument (table fixe, voir arith.rs).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionUnaire {
    Sin,
    Cos,
    Tan,
    Sinh,
    Cosh,
    Tanh,
    Ln,
    Log10,
    Carre,
    Cube,
    ExpE,
    Exp10,
    Racine2,
    Racine3,
    Pi,
}

impl FonctionUnaire {
    pub const TOUTES: [FonctionUnaire; 15] = [
        FonctionUnaire::Sin,
        FonctionUnaire::Cos,
        FonctionUnaire::Tan,
        FonctionUnaire::Sinh,
        FonctionUnaire::Cosh,
        FonctionUnaire::Tanh,
        FonctionUnaire::Ln,
        FonctionUnaire::Log10,
        FonctionUnaire::Carre,
        FonctionUnaire::Cube,
        FonctionUnaire::ExpE,
        FonctionUnaire::Exp10,
        FonctionUnaire::Racine2,
        FonctionUnaire::Racine3,
        FonctionUnaire::Pi,
    ];

    pub fn libelle(self) -> &'static str {
        match self {
            FonctionUnaire::Sin => "sin",
            FonctionUnaire::Cos => "cos",
            FonctionUnaire::Tan => "tan",
            FonctionUnaire::Sinh => "sinh",
            FonctionUnaire::Cosh => "cosh",
            FonctionUnaire::Tanh => "tanh",
            FonctionUnaire::Ln => "ln",
            FonctionUnaire::Log10 => "log10",
            FonctionUnaire::Carre => "x^2",
            FonctionUnaire::Cube => "x^3",
            FonctionUnaire::ExpE => "e^x",
            FonctionUnaire::Exp10 => "10^x",
            FonctionUnaire::Racine2 => "2√x",
            FonctionUnaire::Racine3 => "3√x",
            FonctionUnaire::Pi => "π",
        }
    }
}

/// Fonctions à deux arguments : présentes sur le clavier, pas dans la machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionBinaire {
    PuissanceY,
    RacineY,
}

impl FonctionBinaire {
    pub fn libelle(self) -> &'static str {
        match self {
            FonctionBinaire::PuissanceY => "x^y",
            FonctionBinaire::RacineY => "y√x",
        }
    }

    /// Le mode « deux arguments » n’existe pas encore dans la réduction.
    pub fn verifier(self) -> Result<(), ErreurCalc> {
        Err(ErreurCalc::NonImplemente(self.libelle()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Touche {
    Operateur(Operateur),
    Egal,
    Effacer,
    Signe,
    Point,
    Factorielle,
    Fonction(FonctionUnaire),
    FonctionBinaire(FonctionBinaire),

    // Chiffre OU tout libellé non reconnu (ajouté tel quel à l’affichage).
    Symbole(String),
}

impl Touche {
    /// Libellé de bouton -> jeton. Totale : l’inconnu devient `Symbole`.
    pub fn depuis_libelle(libelle: &str) -> Touche {
        if let Some(op) = Operateur::depuis_symbole(libelle) {
            return Touche::Operateur(op);
        }

        match libelle {
            "=" => return Touche::Egal,
            "C" => return Touche::Effacer,
            "+/-" => return Touche::Signe,
            "." => return Touche::Point,
            "x!" => return Touche::Factorielle,
            "x^y" => return Touche::FonctionBinaire(FonctionBinaire::PuissanceY),
            "y√x" => return Touche::FonctionBinaire(FonctionBinaire::RacineY),
            _ => {}
        }

        FonctionUnaire::TOUTES
            .iter()
            .find(|f| f.libelle() == libelle)
            .map(|f| Touche::Fonction(*f))
            .unwrap_or_else(|| Touche::Symbole(libelle.to_string()))
    }

    /// Jeton -> libellé (inverse de `depuis_libelle`).
    pub fn libelle(&self) -> &str {
        match self {
            Touche::Operateur(op) => op.symbole(),
            Touche::Egal => "=",
            Touche::Effacer => "C",
            Touche::Signe => "+/-",
            Touche::Point => ".",
            Touche::Factorielle => "x!",
            Touche::Fonction(f) => f.libelle(),
            Touche::FonctionBinaire(f) => f.libelle(),
            Touche::Symbole(s) => s,
        }
    }
}
