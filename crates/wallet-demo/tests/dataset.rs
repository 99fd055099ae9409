// File: crates/wallet-demo/tests/dataset.rs
// Purpose: CSV parsing, wallet search and metric selection.

use wallet_demo::{metric_label, write_template, WalletDataset};

const CSV: &str = "\
wallet_address,overall_score,gambling_score,lending_score,nft_score,dex_score,total_txs
0xAbC123,84.6,90.4,85,95.5,80,12
0xabc999,70,65,70,,75,3
0xDEF456,,10,20,30,40,1
";

#[test]
fn score_columns_become_labeled_metrics() {
    let data = WalletDataset::from_reader(CSV.as_bytes()).expect("parse");
    let labels = data.columns.iter().map(|c| c.label.as_str()).collect::<Vec<_>>();
    assert_eq!(labels, ["Gambling", "Lending", "NFTs", "DEX"]);
    assert!(data.columns.iter().all(|c| c.column != "overall_score"));
}

#[test]
fn values_are_rounded_and_bad_rows_skipped() {
    let data = WalletDataset::from_reader(CSV.as_bytes()).expect("parse");
    // 0xabc999 has an empty nft score
    assert_eq!(data.wallets.len(), 2);
    let w = &data.wallets[0];
    assert_eq!(w.scores, vec![90.0, 85.0, 96.0, 80.0]);
    assert_eq!(w.overall, Some(85.0));
    assert_eq!(data.wallets[1].overall, None);
}

#[test]
fn missing_address_column_is_an_error() {
    let err = WalletDataset::from_reader("a_score,b_score\n1,2\n".as_bytes()).unwrap_err();
    assert!(err.to_string().contains("wallet_address"));
}

#[test]
fn single_score_column_is_an_error() {
    let res = WalletDataset::from_reader("wallet_address,a_score,overall_score\nx,1,2\n".as_bytes());
    assert!(res.is_err());
}

#[test]
fn search_is_case_insensitive_substring_in_file_order() {
    let data = WalletDataset::from_reader(CSV.as_bytes()).expect("parse");
    let found = data.search("ABC");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].address, "0xAbC123");
    assert_eq!(data.search("0x").len(), 2);
    assert!(data.search("zzz").is_empty());

    let demo = WalletDataset::demo();
    let found = demo.search("demo");
    assert_eq!(found.iter().map(|w| w.address.as_str()).collect::<Vec<_>>(), ["0xDemo1", "0xDemo2", "0xDemo3"]);
}

#[test]
fn metric_selection_keeps_dataset_order() {
    let data = WalletDataset::demo();
    let picked = data.select_columns(&["dex".into(), "Gambling".into(), "lending_score".into()]).expect("select");
    assert_eq!(picked, vec![0, 1, 4]);

    let series = data.series_for(&data.wallets[0], &picked).expect("series");
    assert_eq!(series.labels().collect::<Vec<_>>(), ["Gambling", "Lending", "DEX"]);
    assert_eq!(series.values().collect::<Vec<_>>(), [90.0, 85.0, 80.0]);

    assert_eq!(data.select_columns(&[]).expect("all").len(), 6);
}

#[test]
fn metric_selection_errors() {
    let data = WalletDataset::demo();
    let err = data.select_columns(&["dex".into()]).unwrap_err();
    assert!(err.to_string().contains("at least 2"));
    let err = data.select_columns(&["dex".into(), "volume".into()]).unwrap_err();
    assert!(err.to_string().contains("volume"));
}

#[test]
fn labels_title_case_with_overrides() {
    assert_eq!(metric_label("perpetuals_score"), "Perpetuals");
    assert_eq!(metric_label("liquid_staking_score"), "Liquid Staking");
    assert_eq!(metric_label("NFT_score"), "NFTs");
    assert_eq!(metric_label("dex_score"), "DEX");
}

#[test]
fn template_round_trips_through_the_loader() {
    let path = std::path::PathBuf::from("target/test_out/wallet_template.csv");
    write_template(&path).expect("write template");
    let data = WalletDataset::from_path(&path).expect("load template");
    assert_eq!(data.wallets.len(), 2);
    assert_eq!(data.columns.len(), 6);
    assert_eq!(data.wallets[0].address, "wallet123");
}
