// tests/normalize.rs
use acervo::{
    collect,
    error::SheetError,
    sheets::{Row, SheetKind, SheetLoader},
    specs::{advisors, calendar, projects, Project, Record},
};

fn row(cells: &[(&str, &str)]) -> Row {
    cells.iter().copied().collect()
}

struct Fixed(Vec<Row>);

impl SheetLoader for Fixed {
    fn load(&self, _sheet: SheetKind) -> Result<Vec<Row>, SheetError> {
        Ok(self.0.clone())
    }
}

#[test]
fn raw_row_maps_onto_full_record() {
    let p = projects::normalize(&row(&[("Título", "Sistema X"), ("Ano", "2023"), ("Autor", "J. Silva")]));
    assert_eq!(
        p,
        Project {
            titulo: "Sistema X".into(),
            ano: "2023".into(),
            autor: "J. Silva".into(),
            ..Default::default()
        }
    );
    assert_eq!(p.orientador, "");
    assert_eq!(p.link_pdf, "");
}

#[test]
fn values_are_trimmed_and_synonyms_fall_through() {
    let p = projects::normalize(&row(&[
        ("Id", "  P-1 "),
        ("Titulo", "  Pontes  "),
        ("Autores", "Ana"),
        ("Link", "https://x/y.pdf"),
        ("Palavras chave", "estruturas"),
    ]));
    assert_eq!(p.id, "P-1");
    assert_eq!(p.titulo, "Pontes");
    assert_eq!(p.autor, "Ana");
    assert_eq!(p.link_pdf, "https://x/y.pdf");
    assert_eq!(p.palavras_chave, "estruturas");
}

#[test]
fn normalizing_canonical_headers_is_idempotent() {
    let first = projects::normalize(&row(&[
        ("ID", "9"),
        ("Ano", "2021"),
        ("Título", "Drenagem"),
        ("Orientador", "Profa. Lima"),
        ("Link Imagem", "https://drive.google.com/file/d/abc/view"),
    ]));

    // Feed the record back through its own export headers.
    let again_row: Row = Project::headers()
        .iter()
        .copied()
        .zip(first.to_row())
        .collect();
    assert_eq!(projects::normalize(&again_row), first);
}

#[test]
fn calendar_and_advisor_synonyms() {
    let ev = calendar::normalize(&row(&[("ano", "2024"), ("Data", "10/03"), ("Descricao", "Sala 3")]));
    assert_eq!((ev.ano.as_str(), ev.data.as_str(), ev.descricao.as_str()), ("2024", "10/03", "Sala 3"));

    let a = advisors::normalize(&row(&[("Nome", " Rita "), ("Áreas de atuação", "Hidráulica")]));
    assert_eq!(a.nome, "Rita");
    assert_eq!(a.areas, "Hidráulica");
    assert!(!a.id.is_empty());
}

#[test]
fn rows_without_identity_are_dropped() {
    let loader = Fixed(vec![
        row(&[("ID", "1"), ("Título", "A")]),
        row(&[("Título", "Sem id")]),
        row(&[("ID", "   "), ("Título", "Espaços")]),
        row(&[("ID", "2"), ("Título", "B")]),
    ]);
    let ps = collect::collect_projects(&loader, None).unwrap();
    let ids: Vec<&str> = ps.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);

    let loader = Fixed(vec![
        row(&[("Ano", "2024"), ("Data", "2024-03-01")]),
        row(&[("Ano", "2024")]),
        row(&[("Data", "2024-03-02")]),
    ]);
    assert_eq!(collect::collect_events(&loader, None).unwrap().len(), 1);

    let loader = Fixed(vec![row(&[("Nome", "Rita")]), row(&[("Email", "x@y")])]);
    assert_eq!(collect::collect_advisors(&loader, None).unwrap().len(), 1);
}
