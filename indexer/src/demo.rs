//! The five-document walkthrough: build, show the index, run four queries.

use anyhow::Result;
use boolcore::{Collection, InvertedIndex, Query, Tokenizer};

const DOCUMENTS: [(u32, &str); 5] = [
    (1, "The quick brown fox jumps over the lazy dog."),
    (2, "A quick brown dog outruns the lazy fox."),
    (3, "The fox is quick, the dog is lazy."),
    (4, "No dogs or foxes here, just a quick cat."),
    (5, "Another document about a dog and a fox, quick quick!"),
];

pub(crate) fn reference_collection() -> Result<Collection> {
    Ok(Collection::try_from_iter(DOCUMENTS)?)
}

pub(crate) fn sample_queries() -> Vec<Query> {
    let t = Query::term;
    vec![
        Query::and([t("quick"), t("fox")]),
        Query::or([t("lazy"), t("cat")]),
        Query::and([Query::and([t("quick"), t("fox")]), Query::negate(t("dog"))]),
        Query::and([t("quick"), Query::or([Query::negate(t("fox")), t("cat")])]),
    ]
}

pub(crate) fn run(tokenizer: Tokenizer) -> Result<()> {
    let collection = reference_collection()?;
    println!("Original Documents:");
    for (doc_id, text) in collection.iter() {
        println!("Doc {doc_id}: {text}");
    }
    println!("\n---");

    let index = InvertedIndex::build(&collection, tokenizer);
    println!("Inverted Index (Term -> Document IDs):");
    for (term, postings) in index.terms() {
        println!("'{term}': {:?}", postings.as_slice());
    }
    println!("\n---");
    println!("All Document IDs: {:?}\n---", index.universe().as_slice());

    for query in sample_queries() {
        for term in query.terms() {
            println!("Postings for '{term}': {:?}", index.lookup(term).as_slice());
        }
        let result = index.evaluate(&query);
        crate::print_result(&query, &result, Some(&collection));
        println!("\n---");
    }
    println!("Boolean retrieval example complete.");
    Ok(())
}
