//! Built-in sample content for every screen.

use crate::navigation::{Overlay, Screen};

use super::entry::{OverlayEntry, ScreenEntry};

const WELCOME_MESSAGE: &str = "un message general de bienvenue";

pub(super) fn standard_entries() -> Vec<ScreenEntry> {
    Screen::all().map(entry_for).collect()
}

fn entry_for(screen: Screen) -> ScreenEntry {
    let (title, body) = match screen {
        Screen::Welcome => page(
            "BIENVENUE",
            &[
                WELCOME_MESSAGE,
                "Nom de votre établissement",
                "Type d'établissement : Restaurant / Bar / Café",
                "Indicatif et numéro de téléphone",
                "Adresse e-mail",
            ],
        ),
        Screen::Login => page(
            "BIENVENUE",
            &[
                WELCOME_MESSAGE,
                "Entrer l'adresse e-mail de connexion",
                "Entrer l'adresse e-mail",
            ],
        ),
        Screen::Verification => page(
            "BIENVENUE",
            &[
                WELCOME_MESSAGE,
                "mail@gmail.com",
                "Entrer le code",
                "Renvoyer le mail · Modifier le mail",
            ],
        ),
        Screen::Payment => page(
            "Paiement",
            &[
                "Montant à débité : 49.000 Fr (54.000 CFA)",
                "Moyen de paiement : WAVE / Orange Money / MTN Money",
                "Numéro de compte à débité : +225 0759028434",
            ],
        ),
        Screen::Account => page(
            "Compte",
            &[
                "Cissé idriss · Montre 1",
                "Aujourd'hui · Cette Semaine · Ce Mois",
                "Aucune alert pour aujourd'hui",
            ],
        ),
        Screen::ServersEmpty => page(
            "Compte",
            &[
                "RESTO LE BRENUSS",
                "EX : 12/10/2026",
                "Ajouter votre premier serveur pour commencer",
            ],
        ),
        Screen::ServersList => page(
            "Compte",
            &[
                "RESTO LE BRENUSS",
                "Cissé idriss · Montre 1 · 08 / 06",
                "Leatitia k · Montre 2 · 08 / 06",
                "DR · Montre 3",
            ],
        ),
        Screen::AddServer => page(
            "Ajouter un serveur",
            &[
                "Information",
                "Nom et prenom du serveur",
                "Genre : Homme / Femme",
                "Numero",
                "Donner un nom à la montre (EX: A1 ou montre 01)",
            ],
        ),
        Screen::Activity => page(
            "Compte",
            &[
                "Cissé idriss · Montre 1",
                "Lundi 17 , Juin , 2025",
                "Table 14 · Demande l'addition · En cours il y a 3 minutes",
                "Table 11 · Appelle Client · Effectué il y a 3 minutes",
                "Mardi 18 , Juin , 2025",
                "Table 18 · Demande l'addition · Effectué il y a 3 minutes",
                "Table 4 · Demande l'addition · En cours il y a 2 jours",
            ],
        ),
        Screen::Tables => page(
            "Les tables",
            &[
                "Table 1 · 12 / 02 / 2025 · #45372",
                "Table 2 · 12 / 02 / 2025 · #45372",
                "Table 3 · 12 / 02 / 2025 · #45372",
                "Table 4 · 12 / 02 / 2025 · #45372",
            ],
        ),
        Screen::AddTable => page(
            "Les tables",
            &[
                "Table 1 · 12 / 02 / 2025 · #45372",
                "Table 2 · 12 / 02 / 2025 · #45372",
                "Ajouter une Table",
                "Donner un nom à la TABLE (EX: TABLE A1 ou TABLE 1)",
            ],
        ),
        Screen::SubscriptionHistory => page(
            "Historique d'abonnement",
            &[
                "Offre spécial réabonnement · 49.000 Fr / 1 An · Remise - 5000 fr",
                "Abonnement · ID: H.14755038 · Montant: 6,99 € · Payé le: 23/09/2024",
                "WAVE · Facture HCY-8714339 · Exp 23/09/2025",
            ],
        ),
        Screen::ProfileSettings => page(
            "",
            &[
                "RESTO LE BRENUSS · 10/07/2020",
                "Type d'établissement : RESTAURANT",
                "Localisation : Yamoussoukro, quartier millionnaire",
                "Nombre de serveur : 03 · Contact : +225 0759028545",
                "Administrateur : Cissé idriss · Cisse@gmail.com",
            ],
        ),
    };

    ScreenEntry {
        screen,
        title,
        body,
        overlay: screen.overlay().map(overlay_for),
    }
}

fn page(
    title: &'static str,
    body: &'static [&'static str],
) -> (&'static str, &'static [&'static str]) {
    (title, body)
}

fn overlay_for(overlay: Overlay) -> OverlayEntry {
    let lines: &'static [&'static str] = match overlay {
        Overlay::Account => &[
            "Code De Connexion #357B200H00",
            "MODIFIER [on]",
            "DÉSACTIVER L'ACCÈS",
            "SUPPRIMER LE COMPTE",
        ],
        Overlay::Servers => &[],
    };
    OverlayEntry { overlay, lines }
}
