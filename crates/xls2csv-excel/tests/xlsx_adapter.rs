//! Reads workbooks written with rust_xlsxwriter through the XLSX adapter

use rust_xlsxwriter::Workbook;
use tempfile::TempDir;
use xls2csv_core::{CellValue, RawRow, SheetSource};
use xls2csv_excel::{open_workbook, XlsxWorkbook};

fn write_fixture(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("fixture.xlsx");
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Numbers").unwrap();
    sheet.write_string(0, 0, "label").unwrap();
    sheet.write_number(0, 1, 1.0).unwrap();
    sheet.write_number(1, 1, 2.5).unwrap();
    sheet.write_boolean(1, 0, true).unwrap();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Offset").unwrap();
    sheet.write_string(2, 1, "late").unwrap();

    workbook.add_worksheet().set_name("Nothing").unwrap();

    workbook.save(&path).unwrap();
    path
}

#[test]
fn test_sheet_names_in_order() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);
    let workbook = open_workbook(&path).unwrap();
    assert_eq!(workbook.format_name(), "xlsx");
    assert_eq!(workbook.sheet_names(), vec!["Numbers", "Offset", "Nothing"]);
}

#[test]
fn test_values_and_whole_number_rendering() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);
    let mut workbook = XlsxWorkbook::open(&path).unwrap();
    let sheet = workbook.range_sheet("Numbers").unwrap();

    let rows: Vec<RawRow> = sheet.rows().collect();
    assert_eq!(
        rows,
        vec![
            vec![CellValue::text("label"), CellValue::Int(1)],
            vec![CellValue::Bool(true), CellValue::Float(2.5)],
        ]
    );
}

#[test]
fn test_leading_blank_rows_and_columns_are_kept() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);
    let mut workbook = open_workbook(&path).unwrap();
    let sheet = workbook.sheet("Offset").unwrap();

    let rows: Vec<RawRow> = sheet.rows().collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], vec![CellValue::Null, CellValue::Null]);
    assert_eq!(rows[2], vec![CellValue::Null, CellValue::text("late")]);
}

#[test]
fn test_unused_sheet_has_no_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);
    let mut workbook = open_workbook(&path).unwrap();
    let sheet = workbook.sheet("Nothing").unwrap();
    assert_eq!(sheet.rows().count(), 0);
}

#[test]
fn test_unknown_sheet_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);
    let mut workbook = open_workbook(&path).unwrap();
    assert!(workbook.sheet("Missing").is_err());
}
