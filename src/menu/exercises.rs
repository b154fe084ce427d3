use log::debug;
use serde_json::{json, Value};

use crate::menu::{
    errors::MenuError,
    handler::{simple, MenuBuilder},
    input::{parse_tokens, Prompt},
    session::SessionConfig,
};
use crate::errors::ExerciseError;
use crate::utils::{
    calendar, cipher,
    geometry::{self, Circle, Point},
    grading, money,
    math::{self, FactorialMethod},
    sequence::{self, SENTINEL},
    text,
};

// 1) two sorted sequences
fn merge_handler(p: &mut dyn Prompt) -> Result<Value, MenuError> {
    let first: Vec<i64> = p.ask_numbers("First sorted sequence: ")?;
    let second: Vec<i64> = p.ask_numbers("Second sorted sequence: ")?;
    let merged = sequence::merge_checked(&first, &second)?;
    Ok(json!({ "first": first, "second": second, "merged": merged }))
}

// 2) integers until the sentinel, possibly several per line
fn extrema_handler(p: &mut dyn Prompt, max_reads: usize) -> Result<Value, MenuError> {
    let mut reads = Vec::new();
    while reads.len() < max_reads && !reads.contains(&SENTINEL) {
        let line = p.ask(&format!("Number ({} ends): ", SENTINEL))?;
        let values: Vec<i64> = parse_tokens(&line)?;
        let room = max_reads - reads.len();
        reads.extend(values.into_iter().take(room));
    }
    debug!("extrema stream collected {} reads", reads.len());

    let report = sequence::track(reads)?;
    Ok(json!({
        "max": report.max,
        "second_max": report.second_max,
        "count": report.count,
    }))
}

fn ask_shift(p: &mut dyn Prompt) -> Result<(String, i64), MenuError> {
    let word = p.ask("Word: ")?;
    let shift = p.ask_number::<i64>("Shift (0-25): ")?;
    Ok((word, shift))
}

// 3) cipher encode
fn encode_handler(p: &mut dyn Prompt) -> Result<Value, MenuError> {
    let (word, shift) = ask_shift(p)?;
    let encoded = cipher::encode(&word, shift)?;
    Ok(json!({ "word": word, "shift": shift, "encoded": encoded }))
}

// 4) cipher decode
fn decode_handler(p: &mut dyn Prompt) -> Result<Value, MenuError> {
    let (word, shift) = ask_shift(p)?;
    let decoded = cipher::decode(&word, shift)?;
    Ok(json!({ "word": word, "shift": shift, "decoded": decoded }))
}

// 5) point against circle
fn circle_handler(p: &mut dyn Prompt) -> Result<Value, MenuError> {
    let point = Point::new(p.ask_number("Point x: ")?, p.ask_number("Point y: ")?);
    let center = Point::new(p.ask_number("Center x: ")?, p.ask_number("Center y: ")?);
    let radius: f64 = p.ask_number("Radius: ")?;

    let circle = Circle::new(center, radius)?;
    let position = circle.classify(point)?;
    Ok(json!({
        "point": [point.x, point.y],
        "center": [circle.center().x, circle.center().y],
        "radius": circle.radius(),
        "position": position.as_str(),
    }))
}

// 6) palindrome, word taken verbatim
fn palindrome_handler(p: &mut dyn Prompt) -> Result<Value, MenuError> {
    let word = p.ask("Word: ")?;
    let palindrome = text::is_palindrome(&word);
    Ok(json!({ "word": word, "reversed": text::reverse(&word), "palindrome": palindrome }))
}

// 7) divisors
fn divisors_handler(p: &mut dyn Prompt) -> Result<Value, MenuError> {
    let n: i64 = p.ask_number("n: ")?;
    let divisors = math::divisors(n)?;
    Ok(json!({ "n": n, "divisors": divisors }))
}

// 8) fibonacci
fn fibonacci_handler(p: &mut dyn Prompt) -> Result<Value, MenuError> {
    let n: u64 = p.ask_number("How many numbers: ")?;
    let seq = math::fibonacci_sequence(n)?;
    Ok(json!({ "n": n, "sequence": seq }))
}

// 9) factorial
fn factorial_handler(
    p: &mut dyn Prompt,
    method: FactorialMethod,
    max_n: i64,
) -> Result<Value, MenuError> {
    let n: i64 = p.ask_number("n: ")?;
    if n > max_n {
        return Err(ExerciseError::invalid(format!("n must be <= {} (got {})", max_n, n)).into());
    }
    let value = match method {
        // exact results are rendered as strings, they outgrow JSON numbers quickly
        FactorialMethod::Exact => Value::String(math::factorial(n)?.to_string()),
        FactorialMethod::Checked => json!(math::factorial_u64(n)?),
    };
    Ok(json!({ "n": n, "method": method.name(), "factorial": value }))
}

// 10) leap year
fn leap_year_handler(p: &mut dyn Prompt) -> Result<Value, MenuError> {
    let year: i64 = p.ask_number("Year: ")?;
    let leap = calendar::is_leap_year(year)?;
    Ok(json!({ "year": year, "leap_year": leap }))
}

// 11) notes for an amount
fn breakdown_handler(p: &mut dyn Prompt) -> Result<Value, MenuError> {
    let amount: i64 = p.ask_number("Amount: ")?;
    let b = money::breakdown(amount)?;
    let mut out = serde_json::Map::new();
    out.insert("amount".into(), json!(amount));
    for (note, count) in &b.notes {
        out.insert(note.to_string(), json!(count));
    }
    out.insert("remainder".into(), json!(b.remainder));
    Ok(Value::Object(out))
}

// 12) triangle from three sides
fn triangle_handler(p: &mut dyn Prompt) -> Result<Value, MenuError> {
    let a: f64 = p.ask_number("Side a: ")?;
    let b: f64 = p.ask_number("Side b: ")?;
    let c: f64 = p.ask_number("Side c: ")?;
    let kind = geometry::classify_triangle(a, b, c)?;
    Ok(json!({ "sides": [a, b, c], "kind": kind.as_str() }))
}

// 13) score to grade
fn grade_handler(p: &mut dyn Prompt) -> Result<Value, MenuError> {
    let score: i64 = p.ask_number(&format!("Score (0-{}): ", grading::MAX_SCORE))?;
    let g = grading::grade(score)?;
    Ok(json!({ "score": score, "grade": g.name() }))
}

// 14) income tax
fn tax_handler(p: &mut dyn Prompt) -> Result<Value, MenuError> {
    let income: f64 = p.ask_number("Income: ")?;
    let a = money::assess_tax(income)?;
    Ok(json!({ "income": income, "rate": a.rate, "tax": a.tax, "total": a.total }))
}

// 15) weekday by number
fn weekday_handler(p: &mut dyn Prompt) -> Result<Value, MenuError> {
    let day: i64 = p.ask_number("Day (1-7): ")?;
    let wd = calendar::weekday(day)?;
    Ok(json!({ "day": day, "weekday": wd.name() }))
}

pub fn register(builder: MenuBuilder, cfg: &SessionConfig) -> MenuBuilder {
    let max_reads = cfg.max_stream_reads;
    let method = cfg.factorial_method;
    let max_factorial = cfg.max_factorial;

    builder
        .entry("1", "Merge two sorted sequences", simple(merge_handler))
        .entry(
            "2",
            "Max and second max of a stream",
            simple(move |p| extrema_handler(p, max_reads)),
        )
        .entry("3", "Cipher: encode a word", simple(encode_handler))
        .entry("4", "Cipher: decode a word", simple(decode_handler))
        .entry("5", "Point inside / on / outside a circle", simple(circle_handler))
        .entry("6", "Palindrome check", simple(palindrome_handler))
        .entry("7", "Divisors of n", simple(divisors_handler))
        .entry("8", "First n Fibonacci numbers", simple(fibonacci_handler))
        .entry(
            "9",
            "Factorial of n",
            simple(move |p| factorial_handler(p, method, max_factorial)),
        )
        .entry("10", "Leap year check", simple(leap_year_handler))
        .entry("11", "Break an amount into notes", simple(breakdown_handler))
        .entry("12", "Classify a triangle", simple(triangle_handler))
        .entry("13", "Grade for a score", simple(grade_handler))
        .entry("14", "Income tax", simple(tax_handler))
        .entry("15", "Weekday by number", simple(weekday_handler))
}
