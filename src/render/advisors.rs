// src/render/advisors.rs
use super::shell;
use crate::{
    config::options::PageKind,
    core::html::{external_link, El},
    pages::{messages, AdvisorsPage},
    specs::Advisor,
};

pub fn page(page: &AdvisorsPage) -> String {
    let mut list = El::new("div").id("advisors-list");
    if let Some(dir) = page.state().ready() {
        list = list.children(dir.advisors().iter().map(card));
    }
    shell(PageKind::Advisors, "advisors", page.panels(), Some(messages::ADVISORS_EMPTY), list).to_html()
}

pub fn card(a: &Advisor) -> El {
    let areas = (!a.areas.is_empty())
        .then(|| El::new("p").class("advisor-areas").text(join!("Áreas de orientação: ", &a.areas)));
    let keywords = (!a.palavras_chave.is_empty())
        .then(|| El::new("p").class("advisor-keywords").text(join!("Palavras-chave: ", &a.palavras_chave)));
    let meta = a.meta_line();
    let meta = (!meta.is_empty()).then(|| El::new("p").class("advisor-meta").text(meta));

    let lattes = (!a.lattes.is_empty()).then(|| external_link(&a.lattes, None, "Currículo Lattes"));
    let email = (!a.email.is_empty())
        .then(|| El::new("a").attr("href", join!("mailto:", &a.email)).text(a.email.as_str()));
    let links = El::new("div").class("advisor-links").maybe(lattes).maybe(email);
    let links = (links.element_count() > 0).then_some(links);

    El::new("article")
        .class("advisor-card")
        .child(El::new("h3").class("advisor-name").text(a.nome.as_str()))
        .maybe(areas)
        .maybe(keywords)
        .maybe(meta)
        .maybe(links)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_card_has_only_the_name() {
        let a = Advisor { nome: s!("Rita"), ..Default::default() };
        assert_eq!(
            card(&a).to_html(),
            "<article class=\"advisor-card\"><h3 class=\"advisor-name\">Rita</h3></article>"
        );
    }

    #[test]
    fn links_render_when_present() {
        let a = Advisor {
            nome: s!("Rita"),
            email: s!("rita@uni.br"),
            lattes: s!("http://lattes.cnpq.br/1"),
            ..Default::default()
        };
        let html = card(&a).to_html();
        assert!(html.contains("<a href=\"mailto:rita@uni.br\">rita@uni.br</a>"));
        assert!(html.contains("Currículo Lattes"));
    }
}
