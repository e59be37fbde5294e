// src/specs/projects.rs
//! Record spec for the projects sheet (`Projetos`).
//!
//! Expected headers (any listed synonym works):
//! ID, Ano, Semestre, Autor, Título, Orientador, Coorientador, Curso,
//! Data de defesa, Banca / Avaliadores, Palavras-chave, Resumo, Link PDF,
//! Link Outros Materiais, Licença, Link Imagem.
//!
//! Identity: `id`. Rows with an empty id never reach the listing.

use super::{first_present, Record};
use crate::sheets::Row;

pub const ID: &[&str] = &["ID", "Id", "id"];
pub const ANO: &[&str] = &["Ano", "ANO", "ano"];
pub const SEMESTRE: &[&str] = &["Semestre", "semestre"];
pub const AUTOR: &[&str] = &["Autor", "Autores", "Autor(es)", "autor"];
pub const TITULO: &[&str] = &["Título", "Titulo", "TITULO", "titulo"];
pub const ORIENTADOR: &[&str] = &["Orientador", "orientador"];
pub const COORIENTADOR: &[&str] = &["Coorientador", "coorientador"];
pub const CURSO: &[&str] = &["Curso", "curso"];
pub const DATA_DEFESA: &[&str] = &["Data de defesa", "Data", "data"];
pub const BANCA: &[&str] = &["Banca / Avaliadores", "Banca", "banca"];
pub const PALAVRAS_CHAVE: &[&str] = &["Palavras-chave", "Palavras chave", "palavras-chave", "palavrasChave"];
pub const RESUMO: &[&str] = &["Resumo", "RESUMO", "resumo"];
pub const LINK_PDF: &[&str] = &["Link PDF", "PDF", "Link", "link"];
pub const LINK_OUTROS: &[&str] = &["Link Outros Materiais", "Outros materiais", "outros"];
pub const LICENCA: &[&str] = &["Licença", "Licenca", "licenca"];
pub const IMAGEM: &[&str] = &["Link Imagem", "Imagem", "Image"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub ano: String,
    pub semestre: String,
    pub autor: String,
    pub titulo: String,
    pub orientador: String,
    pub coorientador: String,
    pub curso: String,
    pub data_defesa: String,
    pub banca: String,
    pub palavras_chave: String,
    pub resumo: String,
    pub link_pdf: String,
    pub link_outros: String,
    pub licenca: String,
    pub imagem: String,
}

pub fn normalize(row: &Row) -> Project {
    Project {
        id: first_present(row, ID),
        ano: first_present(row, ANO),
        semestre: first_present(row, SEMESTRE),
        autor: first_present(row, AUTOR),
        titulo: first_present(row, TITULO),
        orientador: first_present(row, ORIENTADOR),
        coorientador: first_present(row, COORIENTADOR),
        curso: first_present(row, CURSO),
        data_defesa: first_present(row, DATA_DEFESA),
        banca: first_present(row, BANCA),
        palavras_chave: first_present(row, PALAVRAS_CHAVE),
        resumo: first_present(row, RESUMO),
        link_pdf: first_present(row, LINK_PDF),
        link_outros: first_present(row, LINK_OUTROS),
        licenca: first_present(row, LICENCA),
        imagem: first_present(row, IMAGEM),
    }
}

impl Project {
    pub fn is_listed(&self) -> bool {
        !self.id.is_empty()
    }

    /// `"2023 - 2"`, `"2023"`, `"2"` or `""`.
    pub fn period(&self) -> String {
        [self.ano.as_str(), self.semestre.as_str()]
            .into_iter()
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join(" - ")
    }

    /// Lowercased text the free-text search runs against.
    pub fn search_haystack(&self) -> String {
        [
            self.titulo.as_str(),
            self.autor.as_str(),
            self.orientador.as_str(),
            self.palavras_chave.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }
}

impl Record for Project {
    fn headers() -> &'static [&'static str] {
        &[
            "ID", "Ano", "Semestre", "Autor", "Título", "Orientador", "Coorientador", "Curso",
            "Data de defesa", "Banca / Avaliadores", "Palavras-chave", "Resumo", "Link PDF",
            "Link Outros Materiais", "Licença", "Link Imagem",
        ]
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.ano.clone(),
            self.semestre.clone(),
            self.autor.clone(),
            self.titulo.clone(),
            self.orientador.clone(),
            self.coorientador.clone(),
            self.curso.clone(),
            self.data_defesa.clone(),
            self.banca.clone(),
            self.palavras_chave.clone(),
            self.resumo.clone(),
            self.link_pdf.clone(),
            self.link_outros.clone(),
            self.licenca.clone(),
            self.imagem.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_skips_missing_parts() {
        let mut p = Project { ano: s!("2023"), semestre: s!("2"), ..Default::default() };
        assert_eq!(p.period(), "2023 - 2");
        p.semestre.clear();
        assert_eq!(p.period(), "2023");
        p.ano.clear();
        assert_eq!(p.period(), "");
    }

    #[test]
    fn defense_date_prefers_specific_header() {
        let row: Row = [("Data", "01/02/2023"), ("Data de defesa", "15/12/2023")]
            .into_iter()
            .collect();
        assert_eq!(normalize(&row).data_defesa, "15/12/2023");
    }
}
