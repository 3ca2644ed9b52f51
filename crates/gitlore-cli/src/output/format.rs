use gitlore_query::SearchHit;

use super::OutputFormat;

pub fn format_hits(hits: &[SearchHit], fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => format_hits_json(hits),
        OutputFormat::Text => format_hits_text(hits),
    }
}

fn format_hits_json(hits: &[SearchHit]) -> String {
    let values: Vec<_> = hits
        .iter()
        .map(|h| {
            serde_json::json!({
                "score": h.score,
                "key": h.record.key,
                "id": h.record.id,
                "message": h.record.message,
                "author_name": h.record.author_name,
                "author_email": h.record.author_email,
                "time": h.record.time,
            })
        })
        .collect();
    let mut out = serde_json::to_string_pretty(&values).unwrap_or_default();
    out.push('\n');
    out
}

fn format_hits_text(hits: &[SearchHit]) -> String {
    let mut out = String::new();
    for hit in hits {
        let r = &hit.record;
        let short_id = r.id.get(..8).unwrap_or(&r.id);
        let date = r.authored_at().format("%Y-%m-%d %H:%M");
        let subject = r.subject();
        let author = &r.author_name;
        let score = hit.score;
        out.push_str(&format!(
            "{short_id}  {date}  {author:<16}  {subject}  (score: {score:.2})\n"
        ));
    }
    out
}
