//! Tests scénarios : séquences de touches réelles -> affichage + historique.
//!
//! Chaque scénario part de l’état initial. Les libellés sont séparés par des
//! espaces, exactement comme sur les boutons.

use super::arith::{combiner, factorielle};
use super::erreur::ErreurCalc;
use super::format::{format_nombre, lire_nombre};
use super::jetons::{FonctionBinaire, FonctionUnaire, Operateur, Touche};
use super::machine::{appliquer, EtatCalc, MARQUEUR_ERREUR};

/// Joue une séquence ; renvoie l’état final + « la fête a-t-elle eu lieu ? ».
fn jouer(touches: &str) -> (EtatCalc, bool) {
    let mut etat = EtatCalc::default();
    let mut fete = false;
    for libelle in touches.split_whitespace() {
        let issue = etat.presser(libelle);
        fete |= issue.fete;
        etat = issue.etat;
    }
    (etat, fete)
}

fn assert_affichage(touches: &str, attendu: &str) {
    let (etat, _) = jouer(touches);
    assert_eq!(etat.affichage(), attendu, "touches={touches:?}");
}

fn assert_historique(touches: &str, attendu: &[&str]) {
    let (etat, _) = jouer(touches);
    assert_eq!(etat.historique(), attendu, "touches={touches:?}");
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn saisie_remplace_le_zero_initial() {
    assert_affichage("7", "7");
    assert_affichage("1 2 3", "123");
    assert_affichage("0 0 4", "4");
    assert_affichage("1 2 . 5", "12.5");
}

#[test]
fn point_une_seule_fois() {
    assert_affichage("3 .", "3.");
    assert_affichage("3 . .", "3.");
    assert_affichage("3 . 1 . 4", "3.14");
    assert_affichage(".", "0.");
    assert_affichage(". 5", "0.5");
}

#[test]
fn signe_textuel_sans_toucher_aux_operandes() {
    assert_affichage("5 +/-", "-5");
    assert_affichage("5 +/- +/-", "5");
    assert_affichage("+/-", "-0");

    let (etat, _) = jouer("5 + 3 +/-");
    assert_eq!(etat.affichage(), "-3");
    assert_eq!(etat.operateur(), Some(Operateur::Add));
    assert_eq!(etat.premier(), Some(5.0));

    assert_historique("5 + 3 +/- =", &["5 + -3 = 2"]);
}

#[test]
fn libelle_inconnu_ajoute_tel_quel() {
    assert_affichage("mc", "mc");
    assert_affichage("5 (", "5(");
}

/* ------------------------ Opérateurs + égal ------------------------ */

#[test]
fn addition_simple() {
    let (etat, fete) = jouer("2 + 3 =");
    assert_eq!(etat.affichage(), "5");
    assert_eq!(etat.historique(), ["2 + 3 = 5"]);
    assert!(!fete);
    assert_eq!(etat.operateur(), None);
    assert_eq!(etat.premier(), Some(5.0));
    assert!(!etat.attend_second());
}

#[test]
fn operateur_deux_fois_remplace() {
    let (etat, _) = jouer("5 + -");
    assert_eq!(etat.operateur(), Some(Operateur::Sub));
    assert_eq!(etat.premier(), Some(5.0));
    assert_eq!(etat.affichage(), "5");
    assert!(etat.attend_second());

    assert_historique("5 + - 2 =", &["5 - 2 = 3"]);
}

#[test]
fn enchainement_gauche_a_droite() {
    // 2 + 3 * 4 = (2+3)*4, pas de priorité
    let (etat, _) = jouer("2 + 3 *");
    assert_eq!(etat.affichage(), "5");
    assert_eq!(etat.premier(), Some(5.0));

    let (etat, _) = jouer("2 + 3 * 4 =");
    assert_eq!(etat.affichage(), "20");
    // le calcul intermédiaire n’écrit pas d’historique
    assert_eq!(etat.historique(), ["5 * 4 = 20"]);
}

#[test]
fn operateur_apres_egal_garde_le_resultat() {
    assert_historique("2 + 3 = + 1 =", &["2 + 3 = 5", "5 + 1 = 6"]);
}

#[test]
fn egal_sans_operateur_ne_fait_rien() {
    let (etat, _) = jouer("4 2 =");
    assert_eq!(etat.affichage(), "42");
    assert!(etat.historique().is_empty());

    let (avant, _) = jouer("2 + 3 =");
    let (apres, _) = jouer("2 + 3 = =");
    assert_eq!(avant, apres);
}

#[test]
fn flottants_courts() {
    assert_historique("0 . 1 + 0 . 2 =", &["0.1 + 0.2 = 0.30000000000000004"]);
    assert_historique("7 ÷ 2 =", &["7 ÷ 2 = 3.5"]);
    assert_historique("6 * 7 =", &["6 * 7 = 42"]);
}

#[test]
fn division_par_zero_non_finie() {
    assert_historique("1 ÷ 0 =", &["1 ÷ 0 = Infinity"]);
    assert_affichage("1 +/- ÷ 0 =", "-Infinity");
    assert_affichage("0 ÷ 0 =", "NaN");

    // le non-fini se propage dans la suite
    assert_affichage("1 ÷ 0 = + 1 =", "Infinity");
}

/* ------------------------ Fête {2, 6} ------------------------ */

#[test]
fn fete_sur_deux_et_six() {
    let (etat, fete) = jouer("2 + 6 =");
    assert!(fete);
    assert_eq!(etat.affichage(), "8");

    let (_, fete) = jouer("6 * 2 =");
    assert!(fete);

    let (_, fete) = jouer("2 + 5 =");
    assert!(!fete);
}

#[test]
fn fete_aussi_en_enchainement() {
    let etat = jouer("2 + 6").0;
    let issue = etat.presser("+");
    assert!(issue.fete);
    assert_eq!(issue.etat.affichage(), "8");

    // la touche suivante ne re-signale rien
    assert!(!issue.etat.presser("1").fete);
}

/* ------------------------ Effacer ------------------------ */

#[test]
fn effacer_garde_l_historique() {
    let (etat, _) = jouer("2 + 3 = 9 * C");
    assert_eq!(etat.affichage(), "0");
    assert_eq!(etat.operateur(), None);
    assert_eq!(etat.premier(), None);
    assert!(!etat.attend_second());
    assert_eq!(etat.historique(), ["2 + 3 = 5"]);
}

/* ------------------------ Factorielle ------------------------ */

#[test]
fn factorielle_simple() {
    let (etat, _) = jouer("5 x!");
    assert_eq!(etat.affichage(), "120");
    assert_eq!(etat.historique(), ["5! = 120"]);
    assert!(etat.attend_second());

    assert_historique("0 x!", &["0! = 1"]);
    assert_historique("3 . 5 x!", &["3.5! = 6"]);
    assert_historique("2 0 0 x!", &["200! = Infinity"]);
}

#[test]
fn factorielle_negative_bloque_jusqu_a_c() {
    let (etat, _) = jouer("1 +/- x!");
    assert_eq!(etat.affichage(), MARQUEUR_ERREUR);
    assert!(etat.historique().is_empty());

    // tout est ignoré...
    let (etat, _) = jouer("1 +/- x! 5 + sin = x!");
    assert_eq!(etat.affichage(), MARQUEUR_ERREUR);
    assert!(etat.historique().is_empty());

    // ... sauf C
    assert_affichage("1 +/- x! C 3", "3");
}

#[test]
fn factorielle_erreurs_typees() {
    assert_eq!(factorielle(-1.0), Err(ErreurCalc::OperandeInvalide(-1.0)));
    assert_eq!(factorielle(1.0), Ok(1.0));
    assert_eq!(factorielle(10.0), Ok(3_628_800.0));
    assert_eq!(factorielle(1e300), Ok(f64::INFINITY));
    // 2..=floor(NaN) est vide
    assert_eq!(factorielle(f64::NAN), Ok(1.0));
}

#[test]
fn factorielle_de_nan_vaut_un() {
    let (etat, _) = jouer("0 ÷ 0 = x!");
    assert_eq!(etat.affichage(), "1");
    assert_eq!(etat.historique(), ["0 ÷ 0 = NaN", "NaN! = 1"]);
}

/* ------------------------ Fonctions unaires ------------------------ */

#[test]
fn nan_signe_reste_nan() {
    let (etat, _) = jouer("0 ÷ 0 = +/-");
    assert_eq!(etat.affichage(), "-NaN");

    let (etat, _) = jouer("0 ÷ 0 = +/- x^2");
    assert_eq!(etat.affichage(), "NaN");
    assert_eq!(etat.historique(), ["0 ÷ 0 = NaN", "x^2(NaN) = NaN"]);
}

#[test]
fn trig_sur_moins_zero() {
    assert_affichage("+/- sin", "0.00000000");
    assert_affichage("+/- tan", "0.00000000");
    assert_affichage("+/- cos", "1.00000000");
    // sin(-180°) est un petit négatif non nul : le signe reste
    assert_affichage("1 8 0 +/- sin", "-0.00000000");
}

#[test]
fn trig_en_degres_huit_decimales() {
    let (etat, _) = jouer("3 0 sin");
    assert_eq!(etat.affichage(), "0.50000000");
    assert_eq!(etat.historique(), ["sin(30) = 0.50000000"]);
    assert!(etat.attend_second());

    assert_affichage("6 0 cos", "0.50000000");
    assert_affichage("4 5 tan", "1.00000000");
    assert_affichage("0 sin", "0.00000000");
}

#[test]
fn fonctions_sans_conversion() {
    assert_historique("9 2√x", &["2√x(9) = 3"]);
    assert_historique("2 7 3√x", &["3√x(27) = 3"]);
    assert_historique("3 x^2", &["x^2(3) = 9"]);
    assert_historique("2 x^3", &["x^3(2) = 8"]);
    assert_historique("3 10^x", &["10^x(3) = 1000"]);
    assert_historique("1 0 0 log10", &["log10(100) = 2"]);
    assert_historique("0 e^x", &["e^x(0) = 1"]);
    assert_historique("0 sinh", &["sinh(0) = 0"]);
    assert_historique("0 cosh", &["cosh(0) = 1"]);
    assert_historique("0 tanh", &["tanh(0) = 0"]);
    assert_historique("1 ln", &["ln(1) = 0"]);
    assert_historique("0 ln", &["ln(0) = -Infinity"]);
    assert_historique("1 +/- 2√x", &["2√x(-1) = NaN"]);
}

#[test]
fn pi_ignore_l_entree() {
    assert_historique("7 π", &["π(7) = 3.141592653589793"]);
    // chiffre suivant : nouveau nombre
    assert_affichage("π 2", "2");
}

#[test]
fn fonction_puis_operateur() {
    assert_historique("9 2√x + 1 =", &["2√x(9) = 3", "3 + 1 = 4"]);
}

#[test]
fn fonctions_binaires_non_implementees() {
    let (avant, _) = jouer("2 + 3");
    for libelle in ["x^y", "y√x"] {
        let issue = avant.clone().presser(libelle);
        assert_eq!(issue.etat, avant, "libelle={libelle:?}");
        assert!(!issue.fete);
    }

    assert_eq!(
        FonctionBinaire::PuissanceY.verifier(),
        Err(ErreurCalc::NonImplemente("x^y"))
    );
}

/* ------------------------ Jetons ------------------------ */

#[test]
fn libelles_aller_retour() {
    let libelles = [
        "+", "-", "*", "÷", "=", "C", "+/-", ".", "x!", "x^y", "y√x", "7", "mc",
    ];
    for l in libelles {
        assert_eq!(Touche::depuis_libelle(l).libelle(), l);
    }
    for f in FonctionUnaire::TOUTES {
        assert_eq!(
            Touche::depuis_libelle(f.libelle()),
            Touche::Fonction(f),
            "f={f:?}"
        );
    }
    assert_eq!(Touche::depuis_libelle("5"), Touche::Symbole("5".into()));
}

#[test]
fn appliquer_direct_sur_jeton() {
    let issue = appliquer(EtatCalc::default(), &Touche::Symbole("8".into()));
    let issue = appliquer(issue.etat, &Touche::Fonction(FonctionUnaire::Racine3));
    assert_eq!(issue.etat.affichage(), "2");
}

/* ------------------------ Format ------------------------ */

#[test]
fn format_court() {
    assert_eq!(format_nombre(5.0), "5");
    assert_eq!(format_nombre(-0.0), "0");
    assert_eq!(format_nombre(2.5), "2.5");
    assert_eq!(format_nombre(1e21), "1e+21");
    assert_eq!(format_nombre(1.5e-7), "1.5e-7");
    assert_eq!(format_nombre(0.000001), "0.000001");
    assert_eq!(format_nombre(f64::INFINITY), "Infinity");
    assert_eq!(format_nombre(f64::NEG_INFINITY), "-Infinity");
    assert_eq!(format_nombre(f64::NAN), "NaN");
}

#[test]
fn lecture_prefixe() {
    assert_eq!(lire_nombre("3."), 3.0);
    assert_eq!(lire_nombre("-05"), -5.0);
    assert_eq!(lire_nombre("5mc"), 5.0);
    assert_eq!(lire_nombre("1e3"), 1000.0);
    assert_eq!(lire_nombre("1e"), 1.0);
    assert_eq!(lire_nombre("1e+21"), 1e21);
    assert_eq!(lire_nombre("-"), 0.0);
    assert_eq!(lire_nombre("."), 0.0);
    assert_eq!(lire_nombre(""), 0.0);
    assert_eq!(lire_nombre("mc5"), 0.0);
    assert_eq!(lire_nombre(MARQUEUR_ERREUR), 0.0);
    assert_eq!(lire_nombre("Infinity"), f64::INFINITY);
    assert_eq!(lire_nombre("-Infinity"), f64::NEG_INFINITY);
    assert!(lire_nombre("NaN").is_nan());
    assert!(lire_nombre("-NaN").is_nan());
    assert!(lire_nombre("+NaN").is_nan());
}

#[test]
fn combiner_table() {
    assert_eq!(combiner(Operateur::Add, 2.0, 3.0), (5.0, false));
    assert_eq!(combiner(Operateur::Sub, 2.0, 3.0), (-1.0, false));
    assert_eq!(combiner(Operateur::Mul, 6.0, 2.0), (12.0, true));
    assert_eq!(combiner(Operateur::Div, 6.0, 2.0), (3.0, true));
    assert_eq!(combiner(Operateur::Div, 1.0, 4.0), (0.25, false));
}
