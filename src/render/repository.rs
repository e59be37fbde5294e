// src/render/repository.rs
use super::{meta_line, shell};
use crate::{
    config::{consts::DETAIL_PAGE, options::PageKind},
    core::html::{external_link, El},
    data::{ProjectFilter, ProjectOptions},
    pages::{messages, repository::Listing, RepositoryPage},
    specs::Project,
};

/// `projeto.html?id=<urlencoded id>`
pub fn detail_href(id: &str) -> String {
    format!("{}?id={}", DETAIL_PAGE, urlencoding::encode(id))
}

pub fn page(page: &RepositoryPage) -> String {
    let listing = page.state().ready();
    let filters = listing.map(|l| filters(l.options(), l.filter()));
    let results = listing.map(results).unwrap_or_else(|| El::new("div").id("repository-results"));

    let content = El::new("div").class("repository-content").maybe(filters).child(results);
    shell(PageKind::Repository, "repository", page.panels(), Some(messages::REPOSITORY_EMPTY), content)
        .to_html()
}

/// Search box plus the three selections, current filter pre-selected.
pub fn filters(options: &ProjectOptions, current: &ProjectFilter) -> El {
    El::new("div")
        .class("repository-filters")
        .child(
            El::new("input")
                .id("search-input")
                .attr("type", "search")
                .attr("placeholder", "Buscar por título, autor, orientador ou palavra-chave")
                .attr("value", current.term.as_str()),
        )
        .child(select("year-filter", "Todos os anos", &options.years, &current.year))
        .child(select("author-filter", "Todos os autores", &options.authors, &current.author))
        .child(select("advisor-filter", "Todos os orientadores", &options.advisors, &current.advisor))
}

fn select(id: &str, all_label: &str, values: &[String], selected: &str) -> El {
    let all = El::new("option").attr("value", "").flag("selected", selected.is_empty()).text(all_label);
    let opts = values.iter().map(|v| {
        El::new("option")
            .attr("value", v.as_str())
            .flag("selected", v == selected)
            .text(v.as_str())
    });
    El::new("select").id(id).child(all).children(opts)
}

/// Cards for the visible projects, with a year heading whenever a non-empty
/// year starts.
pub fn results(listing: &Listing) -> El {
    let mut container = El::new("div").id("repository-results");
    let mut current_year: Option<&str> = None;
    for p in listing.visible() {
        if !p.ano.is_empty() && current_year != Some(p.ano.as_str()) {
            current_year = Some(p.ano.as_str());
            container = container.child(El::new("h2").class("repository-year-heading").text(p.ano.as_str()));
        }
        container = container.child(card(p));
    }
    container
}

pub fn card(p: &Project) -> El {
    let href = detail_href(&p.id);
    let title = if p.titulo.is_empty() { "(Sem título)" } else { p.titulo.as_str() };

    let period = p.period();
    let meta = meta_line(&[
        ("Autor(a): ", p.autor.as_str()),
        ("Orientador(a): ", p.orientador.as_str()),
        ("Período: ", period.as_str()),
    ]);

    let keywords = (!p.palavras_chave.is_empty()).then(|| {
        El::new("p")
            .class("project-card-keywords")
            .text(join!("Palavras-chave: ", &p.palavras_chave))
    });

    let pdf = (!p.link_pdf.is_empty()).then(|| {
        external_link(&p.link_pdf, Some("project-card-button project-card-button-secondary"), "Baixar PDF")
    });

    El::new("article")
        .class("project-card")
        .child(
            El::new("h3")
                .class("project-card-title")
                .child(El::new("a").attr("href", href.as_str()).class("project-title-link").text(title)),
        )
        .child(El::new("p").class("project-card-meta").text(meta))
        .maybe(keywords)
        .child(
            El::new("div")
                .class("project-card-actions")
                .child(El::new("a").attr("href", href).class("project-card-button").text("Ver detalhes"))
                .maybe(pdf),
        )
}
