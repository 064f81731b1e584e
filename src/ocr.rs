// src/ocr.rs
//
// Frontière avec le collaborateur OCR :
// - texte.rs         : structure blocs/lignes/éléments + concaténation
// - reconnaisseur.rs : trait + tâche asynchrone à usage unique

pub mod reconnaisseur;
pub mod texte;

pub use reconnaisseur::{ErreurReconnaissance, Reconnaisseur, ReconnaisseurManuel, TacheReconnaissance};
pub use texte::{traiter, TexteReconnu};
