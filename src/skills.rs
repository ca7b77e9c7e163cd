use crate::constants::*;
use crate::dom;
use crate::style;
use folio_core::content::{skill_categories, ADDITIONAL_TECH, TECH_STACK};
use web_sys as web;

/// Fill the category cards and the additional-technology badges, replacing
/// anything a previous mount left behind.
pub fn render(document: &web::Document) -> anyhow::Result<()> {
    let cards = dom::element_by_id(document, SKILL_CATEGORIES_ID)?;
    cards.set_inner_html("");
    for category in skill_categories(&TECH_STACK) {
        let card = dom::create_element(document, "div", SKILL_CARD_CLASS)?;
        let title = dom::create_element(document, "h3", "")?;
        title.set_text_content(Some(category.title));
        _ = card.append_child(&title);
        for skill in &category.skills {
            let row = dom::create_element(document, "div", SKILL_ROW_CLASS)?;
            let name = dom::create_element(document, "span", "")?;
            name.set_text_content(Some(skill.name));
            let level = dom::create_element(document, "span", "")?;
            level.set_text_content(Some(&style::level_label(skill.level)));
            let bar = dom::create_element(document, "div", SKILL_BAR_CLASS)?;
            let fill = dom::create_element(document, "div", SKILL_BAR_FILL_CLASS)?;
            _ = fill
                .style()
                .set_property("width", &style::progress_width(skill.level));
            _ = bar.append_child(&fill);
            _ = row.append_child(&name);
            _ = row.append_child(&level);
            _ = row.append_child(&bar);
            _ = card.append_child(&row);
        }
        _ = cards.append_child(&card);
    }

    if let Some(badges) = document.get_element_by_id(ADDITIONAL_TECH_ID) {
        badges.set_inner_html("");
        for tech in ADDITIONAL_TECH {
            let badge = dom::create_element(document, "span", BADGE_CLASS)?;
            badge.set_text_content(Some(tech));
            _ = badges.append_child(&badge);
        }
    }
    Ok(())
}
