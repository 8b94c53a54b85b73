// ============================================================================
// MODELS - MODULE PRINCIPAL
// ============================================================================
//
// Liste des modules:
//   - time_log : Journal des heures enregistrées (table time_log)
//   - dto : Data Transfer Objects pour les réponses API
//
// ============================================================================

pub mod time_log;
pub mod dto;
