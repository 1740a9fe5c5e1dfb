use shared::history::LINE_BREAK_MARKER;
use shared::models::{InterviewResult, SessionRecord};

const HISTORY_COLUMNS: [&str; 6] = ["日時", "企業名", "自己紹介", "質問1", "質問2", "質問3"];

pub(super) fn interview_form_page() -> String {
    page(
        "面接練習",
        concat!(
            "<h1>面接練習</h1>\n",
            "<form method=\"post\" action=\"/interview/result\">\n",
            "<p><label>企業名<br><input type=\"text\" name=\"company\" required></label></p>\n",
            "<p><label>自己紹介<br><textarea name=\"user_intro\" rows=\"6\" cols=\"60\" required></textarea></label></p>\n",
            "<p><button type=\"submit\">想定質問を生成</button></p>\n",
            "</form>\n",
            "<p><a href=\"/history\">履歴を見る</a></p>",
        ),
    )
}

pub(super) fn interview_result_page(result: &InterviewResult) -> String {
    let mut body = String::new();
    body.push_str("<h1>想定質問</h1>\n");
    body.push_str(&format!(
        "<p>企業名：{}</p>\n",
        text_to_html(&result.company)
    ));
    body.push_str(&format!(
        "<p>自己紹介：{}</p>\n",
        text_to_html(&result.self_introduction)
    ));
    body.push_str("<ol>\n");
    for question in &result.questions {
        body.push_str(&format!("<li>{}</li>\n", text_to_html(question)));
    }
    body.push_str("</ol>\n");
    body.push_str(&format!(
        "<h2>モデルの回答全文</h2>\n<p>{}</p>\n",
        text_to_html(&result.raw_reply)
    ));
    body.push_str("<h2>履歴</h2>\n");
    body.push_str(&history_table(&result.history));
    body.push_str("\n<p><a href=\"/interview\">もう一度練習する</a></p>");
    page("面接練習の結果", &body)
}

pub(super) fn history_page(records: &[SessionRecord]) -> String {
    let mut body = String::new();
    body.push_str("<h1>履歴</h1>\n");
    body.push_str(&history_table(records));
    body.push_str("\n<p><a href=\"/interview\">面接練習に戻る</a></p>");
    page("履歴", &body)
}

pub(super) fn error_page() -> String {
    page(
        "エラー",
        "<h1>エラー</h1>\n<p>サーバ内部でエラーが発生しました。時間をおいて再度お試しください。</p>",
    )
}

fn history_table(records: &[SessionRecord]) -> String {
    let mut table = String::from("<table border=\"1\">\n<tr>");
    for column in HISTORY_COLUMNS {
        table.push_str(&format!("<th>{column}</th>"));
    }
    table.push_str("</tr>\n");

    for record in records {
        table.push_str("<tr>");
        for field in [
            record.timestamp.as_str(),
            record.company.as_str(),
            record.self_introduction.as_str(),
            record.questions[0].as_str(),
            record.questions[1].as_str(),
            record.questions[2].as_str(),
        ] {
            table.push_str(&format!("<td>{}</td>", field_to_html(field)));
        }
        table.push_str("</tr>\n");
    }

    table.push_str("</table>");
    table
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"ja\">\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
        escape_html(title),
        body
    )
}

/// Escapes a stored field while expanding the store's line-break markers
/// into real `<br>` tags.
fn field_to_html(field: &str) -> String {
    field
        .split(LINE_BREAK_MARKER)
        .map(escape_html)
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Escapes fresh (unstored) text, turning raw newlines into `<br>` tags.
fn text_to_html(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
