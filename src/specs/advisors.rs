// src/specs/advisors.rs
//! Record spec for the advisors sheet (`Orientadores`).
//!
//! The sheet has no key column. Each advisor gets an id derived from its
//! content (name + email), so the same row yields the same id on every load.

use sha2::{Digest, Sha256};

use super::{first_present, Record};
use crate::sheets::Row;

pub const NOME: &[&str] = &["Nome"];
pub const LATTES: &[&str] = &["Lattes"];
pub const EMAIL: &[&str] = &["Email"];
pub const AREAS: &[&str] = &["Áreas de atuação"];
pub const PALAVRAS_CHAVE: &[&str] = &["Palavras-chave"];
pub const DISPONIBILIDADE: &[&str] = &["Disponibilidade"];
pub const OBSERVACOES: &[&str] = &["Observações"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Advisor {
    pub id: String,
    pub nome: String,
    pub lattes: String,
    pub email: String,
    pub areas: String,
    pub palavras_chave: String,
    pub disponibilidade: String,
    pub observacoes: String,
}

pub fn normalize(row: &Row) -> Advisor {
    let nome = first_present(row, NOME);
    let email = first_present(row, EMAIL);
    Advisor {
        id: advisor_id(&nome, &email),
        lattes: first_present(row, LATTES),
        areas: first_present(row, AREAS),
        palavras_chave: first_present(row, PALAVRAS_CHAVE),
        disponibilidade: first_present(row, DISPONIBILIDADE),
        observacoes: first_present(row, OBSERVACOES),
        nome,
        email,
    }
}

/// First 16 hex chars of SHA-256(`nome` + "\n" + `email`).
pub fn advisor_id(nome: &str, email: &str) -> String {
    let mut h = Sha256::new();
    h.update(nome.as_bytes());
    h.update(b"\n");
    h.update(email.as_bytes());
    h.finalize()
        .iter()
        .take(8)
        .map(|b| format!("{b:02x}"))
        .collect()
}

impl Advisor {
    pub fn is_listed(&self) -> bool {
        !self.nome.is_empty()
    }

    /// Availability and notes joined by ` | `; empty when both are.
    pub fn meta_line(&self) -> String {
        let mut parts = Vec::new();
        if !self.disponibilidade.is_empty() {
            parts.push(format!("Disponibilidade: {}", self.disponibilidade));
        }
        if !self.observacoes.is_empty() {
            parts.push(self.observacoes.clone());
        }
        parts.join(" | ")
    }
}

impl Record for Advisor {
    fn headers() -> &'static [&'static str] {
        &["Nome", "Lattes", "Email", "Áreas de atuação", "Palavras-chave", "Disponibilidade", "Observações"]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.nome.clone(),
            self.lattes.clone(),
            self.email.clone(),
            self.areas.clone(),
            self.palavras_chave.clone(),
            self.disponibilidade.clone(),
            self.observacoes.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_stable_and_content_derived() {
        let row: Row = [("Nome", "Maria Souza"), ("Email", "maria@uni.br")].into_iter().collect();
        let a = normalize(&row);
        let b = normalize(&row);
        assert_eq!(a.id, b.id);
        assert_eq!(a.id.len(), 16);
        assert!(a.id.chars().all(|c| c.is_ascii_hexdigit()));

        let other: Row = [("Nome", "Maria Souza"), ("Email", "msouza@uni.br")].into_iter().collect();
        assert_ne!(normalize(&other).id, a.id);
    }

    #[test]
    fn meta_line_joins_present_parts() {
        let mut a = Advisor { disponibilidade: s!("2 vagas"), observacoes: s!("Somente noturno"), ..Default::default() };
        assert_eq!(a.meta_line(), "Disponibilidade: 2 vagas | Somente noturno");
        a.disponibilidade.clear();
        assert_eq!(a.meta_line(), "Somente noturno");
        a.observacoes.clear();
        assert_eq!(a.meta_line(), "");
    }
}
