// ============================================================================
// MODÈLE : TIME LOG
// ============================================================================
//
// Colonnes de la table time_log:
//   - id (INTEGER, PRIMARY KEY, AUTO_INCREMENT)
//   - timestamp (DATETIME, NOT NULL) - heure murale dans le fuseau configuré
//
// Points d'attention:
//   - Table en ajout seul: une ligne par appel réussi, jamais d'UPDATE/DELETE
//   - La table est créée hors de l'application (pas de migration ici)
//
// ============================================================================

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "time_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub timestamp: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
