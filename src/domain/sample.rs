//! Random sample links for seeding non-production databases.
//!
//! Generated links always satisfy the submission rules in
//! [`crate::domain::validation`], so a seeded listing looks like one filled
//! through the form.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::domain::validation::MAX_FIELD_LENGTH;
use crate::error::AppError;

const WORDS: &[&str] = &[
    "alias", "consequatur", "aut", "perferendis", "sit", "voluptatem", "accusantium", "doloremque",
    "aperiam", "eaque", "ipsa", "quae", "ab", "illo", "inventore", "veritatis", "et", "quasi",
    "architecto", "beatae", "vitae", "dicta", "sunt", "explicabo", "aspernatur", "odit", "fugit",
    "sed", "quia", "consequuntur", "magni", "dolores", "eos", "qui", "ratione", "sequi",
    "nesciunt", "neque", "dolorem", "ipsum", "quisquam", "est", "dolor", "amet", "adipisci",
    "velit", "numquam", "eius", "modi", "tempora", "incidunt", "ut", "labore", "dolore",
    "magnam", "aliquam", "quaerat", "enim", "minima", "veniam", "nostrum", "exercitationem",
    "ullam", "corporis", "nisi", "aliquid", "ex", "ea", "commodi", "autem", "vel", "eum",
    "iure", "reprehenderit", "voluptate", "esse", "nihil", "molestiae", "illum", "fugiat",
    "nulla", "pariatur", "at", "vero", "accusamus", "officiis", "debitis", "rerum",
    "necessitatibus", "saepe", "eveniet", "recusandae", "itaque", "earum", "hic", "tenetur",
    "sapiente", "delectus", "reiciendis", "maiores",
];

const TLDS: &[&str] = &["com", "net", "org", "info", "biz", "io"];

/// Generates a random link that passes submission validation.
///
/// - `title`: a capitalised phrase of two or three words ending with a period
/// - `url`: an absolute `http`/`https` URL on a random host, sometimes with a path
/// - `description`: a paragraph of up to four sentences, never longer than
///   [`MAX_FIELD_LENGTH`] characters
pub fn generate_sample_link() -> NewLink {
    generate_sample_link_with(&mut rand::rng())
}

/// Inserts `count` freshly generated sample links, returning them as stored.
///
/// # Errors
///
/// Stops at the first failed insert and returns its [`AppError`]. Links
/// inserted before the failure stay in the store.
pub async fn seed(repository: &dyn LinkRepository, count: usize) -> Result<Vec<Link>, AppError> {
    let mut links = Vec::with_capacity(count);
    for _ in 0..count {
        links.push(repository.insert(generate_sample_link()).await?);
    }
    tracing::info!(count, "Seeded sample links");

    Ok(links)
}

/// Same as [`generate_sample_link`], drawing from the given generator.
pub fn generate_sample_link_with<R: Rng>(rng: &mut R) -> NewLink {
    let word_count = rng.random_range(2..=3);

    NewLink {
        title: sentence(rng, word_count),
        url: url(rng),
        description: paragraph(rng),
    }
}

fn word<R: Rng>(rng: &mut R) -> &'static str {
    WORDS.choose(rng).copied().unwrap_or("lorem")
}

fn sentence<R: Rng>(rng: &mut R, word_count: usize) -> String {
    let words: Vec<&str> = (0..word_count).map(|_| word(rng)).collect();
    let mut sentence = capitalize(&words.join(" "));
    sentence.push('.');
    sentence
}

fn paragraph<R: Rng>(rng: &mut R) -> String {
    let sentence_count = rng.random_range(2..=4);
    let mut paragraph = String::new();

    for _ in 0..sentence_count {
        let word_count = rng.random_range(4..=8);
        let next = sentence(rng, word_count);
        let separator = usize::from(!paragraph.is_empty());

        if paragraph.chars().count() + separator + next.chars().count() > MAX_FIELD_LENGTH {
            break;
        }
        if separator == 1 {
            paragraph.push(' ');
        }
        paragraph.push_str(&next);
    }

    paragraph
}

fn url<R: Rng>(rng: &mut R) -> String {
    let scheme = if rng.random_bool(0.5) { "https" } else { "http" };
    let www = if rng.random_bool(0.3) { "www." } else { "" };
    let tld = TLDS.choose(rng).copied().unwrap_or("com");
    let host = format!("{www}{}{}.{tld}", word(rng), word(rng));

    match rng.random_range(0..3) {
        0 => format!("{scheme}://{host}/"),
        1 => {
            let slug: Vec<&str> = (0..rng.random_range(2..=4)).map(|_| word(rng)).collect();
            format!("{scheme}://{host}/{}", slug.join("-"))
        }
        _ => format!("{scheme}://{host}/{}/{}.html", word(rng), word(rng)),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
