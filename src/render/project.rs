// src/render/project.rs
use super::{meta_line, shell};
use crate::{
    config::options::PageKind,
    core::{
        html::{external_link, El},
        sanitize::drive_thumbnail_url,
    },
    pages::ProjectDetailPage,
    specs::Project,
};

pub const NO_TITLE: &str = "Trabalho sem título";
pub const NO_ABSTRACT: &str =
    "Resumo não informado. Entre em contato com a coordenação para mais informações.";

pub fn page(page: &ProjectDetailPage) -> String {
    let content = match page.project() {
        Some(p) => content(p),
        None => El::new("article").id("project-content").flag("hidden", true),
    };
    shell(PageKind::ProjectDetail, "project", page.panels(), None, content).to_html()
}

/// `<strong>{label}</strong>{value}`, or nothing when `value` is empty.
fn labelled(id: &str, label: &str, value: &str) -> Option<El> {
    (!value.is_empty()).then(|| {
        El::new("p").id(id).child(El::new("strong").text(label)).text(value)
    })
}

pub fn content(p: &Project) -> El {
    let title = if p.titulo.is_empty() { NO_TITLE } else { p.titulo.as_str() };

    let advisors = {
        let parts: Vec<(&str, &str)> = [("Orientador(a): ", p.orientador.as_str()), ("Coorientador(a): ", p.coorientador.as_str())]
            .into_iter()
            .filter(|(_, v)| !v.is_empty())
            .collect();
        (!parts.is_empty()).then(|| {
            let mut el = El::new("p").id("project-advisors");
            for (ix, (label, value)) in parts.into_iter().enumerate() {
                if ix > 0 {
                    el = el.text(" | ");
                }
                el = el.child(El::new("strong").text(label)).text(value);
            }
            el
        })
    };

    let period = p.period();
    let extra = meta_line(&[
        ("Curso: ", p.curso.as_str()),
        ("Período: ", period.as_str()),
        ("Data da defesa: ", p.data_defesa.as_str()),
        ("Licença: ", p.licenca.as_str()),
    ]);
    let extra = (!extra.is_empty()).then(|| El::new("p").id("project-extra-meta").text(extra));

    let keywords = (!p.palavras_chave.is_empty()).then(|| {
        El::new("p").id("project-keywords").text(join!("Palavras-chave: ", &p.palavras_chave))
    });

    let resumo = if p.resumo.is_empty() { NO_ABSTRACT } else { p.resumo.as_str() };

    let image = (!p.imagem.is_empty()).then(|| {
        El::new("img")
            .attr("src", drive_thumbnail_url(&p.imagem))
            .attr("alt", join!("Imagem ilustrativa do trabalho: ", &p.titulo))
    });

    let pdf = (!p.link_pdf.is_empty())
        .then(|| external_link(&p.link_pdf, Some("project-card-button"), "Baixar PDF do trabalho"));
    let outros = (!p.link_outros.is_empty()).then(|| {
        external_link(&p.link_outros, Some("project-card-button project-card-button-secondary"), "Outros materiais")
    });

    El::new("article")
        .id("project-content")
        .child(El::new("h1").id("project-title").text(title))
        .maybe(labelled("project-author", "Autor(a): ", &p.autor))
        .maybe(advisors)
        .maybe(labelled("project-banca", "Banca: ", &p.banca))
        .maybe(extra)
        .maybe(keywords)
        .child(El::new("div").id("project-image-wrapper").maybe(image))
        .child(El::new("p").id("project-abstract").text(resumo))
        .child(El::new("div").id("project-links").maybe(pdf).maybe(outros))
}
