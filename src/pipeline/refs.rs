//! Reference list rendering and range compaction.
//!
//! The compacted "alt" notation collapses consecutive numeric runs of
//! one prefix into `R1-R5` tokens. Compaction is losslessly invertible:
//! [`expand`] applied to [`compact`] output reproduces the original
//! reference set exactly, which is what makes the notation safe for
//! downstream consumption.

use crate::model::refdes::{natural_cmp, RefDes};

/// Render a group's reference cell.
///
/// Plain mode joins the references in first-seen order; alt mode
/// compacts them. `separator` applies to both.
pub fn render(references: &[String], use_alt: bool, separator: &str) -> String {
    if use_alt {
        compact(references, separator)
    } else {
        references.join(separator)
    }
}

/// Compact references into range notation.
///
/// Parseable references sort by prefix then number and emit maximal
/// consecutive runs (`R1-R5`) or single tokens; references that do not
/// round-trip through prefix/number parsing are appended verbatim in
/// natural order.
pub fn compact(references: &[String], separator: &str) -> String {
    let mut parsed: Vec<(RefDes<'_>, &str)> = Vec::new();
    let mut verbatim: Vec<&str> = Vec::new();
    for reference in references {
        match RefDes::parse(reference) {
            Some(refdes) => parsed.push((refdes, reference)),
            None => verbatim.push(reference),
        }
    }
    parsed.sort_by(|(a, _), (b, _)| a.prefix.cmp(b.prefix).then(a.number.cmp(&b.number)));
    verbatim.sort_by(|a, b| natural_cmp(a, b));

    let mut tokens = Vec::new();
    let mut i = 0;
    while i < parsed.len() {
        let mut j = i;
        while j + 1 < parsed.len()
            && parsed[j + 1].0.prefix == parsed[i].0.prefix
            && parsed[j + 1].0.number == parsed[j].0.number + 1
        {
            j += 1;
        }
        if j > i {
            tokens.push(format!("{}-{}", parsed[i].1, parsed[j].1));
        } else {
            tokens.push(parsed[i].1.to_string());
        }
        i = j + 1;
    }
    tokens.extend(verbatim.into_iter().map(str::to_string));
    tokens.join(separator)
}

/// Expand compacted notation back into the full reference list.
///
/// Inverse of [`compact`]; tokens that are not range notation pass
/// through verbatim.
pub fn expand(text: &str, separator: &str) -> Vec<String> {
    text.split(separator)
        .filter(|t| !t.is_empty())
        .flat_map(expand_token)
        .collect()
}

fn expand_token(token: &str) -> Vec<String> {
    for (idx, c) in token.char_indices() {
        if c != '-' {
            continue;
        }
        let (first, rest) = token.split_at(idx);
        let last = &rest[1..];
        if let (Some(a), Some(b)) = (RefDes::parse(first), RefDes::parse(last)) {
            if a.prefix == b.prefix && b.number >= a.number {
                return (a.number..=b.number)
                    .map(|n| format!("{}{}", a.prefix, n))
                    .collect();
            }
        }
    }
    vec![token.to_string()]
}
