use tracert_model::TopoRecord;

const HEADER: [&str; 7] = ["TTL", "NODE", "ADDRESS", "LATENCY", "RECV", "LOCATION", "TIME"];

pub fn render_hop_table(records: &[&TopoRecord]) -> String {
    let rows: Vec<[String; 7]> = records.iter().map(|record| hop_row(record)).collect();

    let mut widths = HEADER.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_line(&HEADER.map(str::to_string), &widths));
    for row in &rows {
        lines.push(format_line(row, &widths));
    }
    lines.join("\n")
}

fn hop_row(record: &TopoRecord) -> [String; 7] {
    let address = if record.res_addr.is_empty() {
        "*".to_string()
    } else {
        record.res_addr.clone()
    };
    let latency = if record.recv_cnt == 0 {
        "-".to_string()
    } else {
        format!("{:.2} ms", record.mean_latency)
    };
    let time = record
        .tracert_time
        .map(|time| time.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());

    [
        record.ttl.to_string(),
        or_dash(&record.name),
        address,
        latency,
        record.recv_cnt.to_string(),
        location(record),
        time,
    ]
}

fn location(record: &TopoRecord) -> String {
    let parts: Vec<&str> = [&record.country, &record.region, &record.city, &record.isp]
        .into_iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty() && *part != "-")
        .collect();
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(" ")
    }
}

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn format_line(cells: &[String; 7], widths: &[usize; 7]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    padded.join("  ").trim_end().to_string()
}
