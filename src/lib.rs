//! Service HTTP qui enregistre l'heure courante dans `time_log` et la retourne en JSON.
//!
//! Modules:
//! - `app`: démarrage et arrêt du processus
//! - `config`: lecture des variables d'environnement
//! - `db`: connexion SeaORM (open / ping / close)
//! - `server`: serveur Actix et arrêt gracieux
//! - `routes`: route /current-time
//! - `services`: accès à la table time_log
//! - `models`: entité SeaORM et DTO
//! - `utils`: DSN, fuseau horaire, logs

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod server;
pub mod services;
pub mod utils;
