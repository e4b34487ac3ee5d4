use calmath_core::format::formatted_period;
use calmath_core::host::HeadlessHost;
use calmath_core::items::normalize_item;
use calmath_core::locale::get_formatted_month_names;
use calmath_core::models::{CalendarItem, DateTimeFormatOption, PeriodUnit};
use calmath_core::parse::from_iso_string_to_local_date;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_iso_parsing(c: &mut Criterion) {
    c.bench_function("from_iso_string_to_local_date", |b| {
        b.iter(|| from_iso_string_to_local_date(black_box("2018-05-06T10:20:30.250Z")).unwrap())
    });
}

fn bench_formatted_period(c: &mut Criterion) {
    let start = from_iso_string_to_local_date("2018-12-16").unwrap();
    let end = from_iso_string_to_local_date("2019-01-05").unwrap();
    let host = HeadlessHost::new(start).with_locale_formatting();
    let months = get_formatted_month_names(&host, "en-US", DateTimeFormatOption::Long);

    c.bench_function("formatted_period_week", |b| {
        b.iter(|| formatted_period(black_box(start), black_box(end), PeriodUnit::Week, &months))
    });

    c.bench_function("month_names_en_us", |b| {
        b.iter(|| get_formatted_month_names(&host, black_box("en-US"), DateTimeFormatOption::Long))
    });
}

fn bench_normalize_item(c: &mut Criterion) {
    let mut item = CalendarItem::new("bench", "2018-05-06T09:00:00");
    item.end_date = Some("2018-05-06T10:30:00".into());
    item.classes = vec!["work".to_string(), "meeting".to_string()].into();

    c.bench_function("normalize_item", |b| {
        b.iter(|| normalize_item(black_box(&item), true).unwrap().classes.len())
    });
}

criterion_group!(
    benches,
    bench_iso_parsing,
    bench_formatted_period,
    bench_normalize_item
);
criterion_main!(benches);
