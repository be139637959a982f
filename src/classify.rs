//! Boundary error classification.
//!
//! The pipeline reports failures as raw causes; this module turns them
//! into the fixed user-facing taxonomy exactly once, at the place the
//! error is about to be shown (API response mapping or CLI output).

use serde::Serialize;

use crate::balance::BalanceError;

// ── Taxonomy ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Validation,
    Network,
    Blockchain,
    Server,
    Unknown,
}

/// Classified error, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    pub message: String,
    pub code: String,
    pub category: ErrorCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub retryable: bool,
}

/// What the boundary observed, before classification. A tagged
/// rendition of "whatever was thrown": schema failures keep their
/// issue list, transport failures and HTTP statuses keep their shape,
/// anything else is either a bare message or nothing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Validation-schema failure with its list of issues.
    Validation { issues: Vec<String> },
    /// Transport-layer failure (the connection itself failed).
    Transport { message: String },
    /// An HTTP response with an error status.
    Http { status: u16 },
    /// Any other error that carries a message.
    Message { message: String },
    /// A non-error value was thrown.
    Unknown,
}

impl From<&BalanceError> for Failure {
    fn from(err: &BalanceError) -> Self {
        match err {
            BalanceError::Validation(e) => Failure::Validation {
                issues: vec![e.to_string()],
            },
            BalanceError::Fetch { .. } => Failure::Message {
                message: err.to_string(),
            },
        }
    }
}

// ── Classification ───────────────────────────────────────────────────

fn info(
    message: &str,
    code: String,
    category: ErrorCategory,
    details: &str,
    retryable: bool,
) -> ErrorInfo {
    ErrorInfo {
        message: message.to_string(),
        code,
        category,
        details: Some(details.to_string()),
        retryable,
    }
}

/// Map a failure to the taxonomy. Priority-ordered pattern checks,
/// first match wins.
pub fn classify(failure: &Failure) -> ErrorInfo {
    match failure {
        Failure::Validation { .. } => info(
            "Données invalides",
            "VALIDATION_ERROR".to_string(),
            ErrorCategory::Validation,
            "Veuillez vérifier les champs du formulaire",
            false,
        ),
        Failure::Transport { .. } => info(
            "Erreur de connexion",
            "NETWORK_ERROR".to_string(),
            ErrorCategory::Network,
            "Impossible de se connecter au serveur. Vérifiez votre connexion internet.",
            true,
        ),
        Failure::Http { status } if (400..500).contains(status) => info(
            "Erreur de requête",
            format!("HTTP_{status}"),
            ErrorCategory::Validation,
            &http_status_details(*status),
            false,
        ),
        Failure::Http { status } if *status >= 500 => info(
            "Erreur du serveur",
            format!("HTTP_{status}"),
            ErrorCategory::Server,
            "Le serveur rencontre des difficultés. Veuillez réessayer plus tard.",
            true,
        ),
        // Informational/redirect statuses carry no error shape we
        // recognize; they land in the unknown bucket below.
        Failure::Http { .. } => unknown_info(),
        Failure::Message { message } => classify_message(message),
        Failure::Unknown => unknown_info(),
    }
}

fn classify_message(message: &str) -> ErrorInfo {
    let lower = message.to_lowercase();
    if lower.contains("timeout") {
        return info(
            "Délai d'attente dépassé",
            "TIMEOUT_ERROR".to_string(),
            ErrorCategory::Network,
            "La requête a pris trop de temps. Veuillez réessayer.",
            true,
        );
    }
    if lower.contains("insufficient funds") {
        return info(
            "Fonds insuffisants",
            "INSUFFICIENT_FUNDS".to_string(),
            ErrorCategory::Blockchain,
            "L'adresse n'a pas suffisamment de fonds pour cette opération.",
            false,
        );
    }
    if lower.contains("invalid address") {
        return info(
            "Adresse invalide",
            "INVALID_ADDRESS".to_string(),
            ErrorCategory::Blockchain,
            "L'adresse Ethereum fournie n'est pas valide.",
            false,
        );
    }
    if lower.contains("network") {
        return info(
            "Erreur de réseau blockchain",
            "BLOCKCHAIN_NETWORK_ERROR".to_string(),
            ErrorCategory::Blockchain,
            "Impossible de se connecter à la blockchain. Veuillez réessayer.",
            true,
        );
    }
    info(
        message,
        "GENERIC_ERROR".to_string(),
        ErrorCategory::Unknown,
        "Une erreur inattendue s'est produite.",
        true,
    )
}

fn unknown_info() -> ErrorInfo {
    info(
        "Erreur inconnue",
        "UNKNOWN_ERROR".to_string(),
        ErrorCategory::Unknown,
        "Une erreur inattendue s'est produite. Veuillez réessayer.",
        true,
    )
}

fn http_status_details(status: u16) -> String {
    match status {
        400 => "Requête invalide. Vérifiez les données saisies.".to_string(),
        401 => "Non autorisé. Authentification requise.".to_string(),
        403 => "Accès interdit.".to_string(),
        404 => "Ressource non trouvée.".to_string(),
        429 => "Trop de requêtes. Veuillez patienter avant de réessayer.".to_string(),
        _ => format!("Erreur HTTP {status}."),
    }
}

// ── Display helpers ──────────────────────────────────────────────────

/// Render a classified error as one line: message, details if any,
/// then the retry hint when the error is retryable.
pub fn format_message(info: &ErrorInfo) -> String {
    let mut message = info.message.clone();
    if let Some(details) = &info.details {
        message.push(' ');
        message.push_str(details);
    }
    if info.retryable {
        message.push_str(" Vous pouvez réessayer.");
    }
    message
}

/// Whether retrying the same operation might succeed.
pub fn is_retryable(failure: &Failure) -> bool {
    classify(failure).retryable
}
