use gimei_generate::{Corpus, Gimei, Renderable, Script, Sex};

const OVERLAPPING_ADDRESSES: &str = "\
addresses:
  prefecture:
    - [東京都, とうきょうと, トウキョウト]
  city:
    - [大島, おおしま, オオシマ]
    - [大島郡, おおしまぐん, オオシマグン]
  town:
    - [郡本町, ぐんほんちょう, グンホンチョウ]
    - [本町, ほんちょう, ホンチョウ]
";

#[test]
fn finds_documented_address() {
    let gimei = Gimei::new();
    let address = gimei
        .find_address_by_kanji("岡山県大島郡大和村稲木町")
        .expect("address exists");

    assert_eq!(address.prefecture.kanji(), "岡山県");
    assert_eq!(address.city.kanji(), "大島郡大和村");
    assert_eq!(address.town.kanji(), "稲木町");
    assert_eq!(address.to_string(), "岡山県大島郡大和村稲木町");
    assert_eq!(
        address.hiragana(),
        "おかやまけんおおしまぐんやまとそんいなぎちょう"
    );
    assert_eq!(
        address.katakana(),
        "オカヤマケンオオシマグンヤマトソンイナギチョウ"
    );

    let by_hiragana = gimei
        .find_address_by_hiragana("おかやまけんおおしまぐんやまとそんいなぎちょう")
        .expect("hiragana lookup");
    assert_eq!(by_hiragana, address);

    let by_katakana = gimei
        .find_address_by_katakana("オカヤマケンオオシマグンヤマトソンイナギチョウ")
        .expect("katakana lookup");
    assert_eq!(by_katakana, address);
}

#[test]
fn finds_documented_name() {
    let gimei = Gimei::new();
    let name = gimei.find_name_by_kanji("小林 顕士").expect("name exists");

    assert_eq!(name.to_string(), "小林 顕士");
    assert_eq!(name.hiragana(), "こばやし けんじ");
    assert_eq!(name.katakana(), "コバヤシ ケンジ");
    assert_eq!(name.last.hiragana(), "こばやし");
    assert_eq!(name.first.kanji(), "顕士");
    assert_eq!(name.sex, Sex::Male);
}

#[test]
fn sampled_names_round_trip_in_every_script() {
    let gimei = Gimei::seeded(77);
    for _ in 0..200 {
        let name = gimei.name();
        for script in Script::ALL {
            let rendering = name.render(script);
            let found = gimei
                .find_name(&rendering, script)
                .unwrap_or_else(|| panic!("{script} lookup of {rendering} failed"));
            assert_eq!(found.render(script), rendering);
        }
    }
}

#[test]
fn sampled_addresses_round_trip_in_kana_and_kanji() {
    let gimei = Gimei::seeded(78);
    for _ in 0..200 {
        let address = gimei.address();
        for script in [Script::Kanji, Script::Hiragana, Script::Katakana] {
            let rendering = address.render(script);
            let found = gimei
                .find_address(&rendering, script)
                .unwrap_or_else(|| panic!("{script} lookup of {rendering} failed"));
            assert_eq!(found.render(script), rendering);
        }
    }
}

#[test]
fn romaji_lookup_ignores_case_and_swaps_order() {
    let gimei = Gimei::new();
    let name = gimei
        .find_name_by_romaji("KENJI kobayashi")
        .expect("romaji lookup");
    assert_eq!(name.kanji(), "小林 顕士");
    assert_eq!(name.romaji(), "Kenji Kobayashi");

    assert!(gimei.find_name_by_romaji("Kobayashi Kenji").is_none());
}

#[test]
fn malformed_names_are_not_found() {
    let gimei = Gimei::new();
    assert!(gimei.find_name_by_romaji("oneword").is_none());
    assert!(gimei.find_name_by_kanji("小林顕士").is_none());
    assert!(gimei.find_name_by_kanji("小林 顕士 様").is_none());
    assert!(gimei.find_name_by_kanji("小林  顕士").is_none());
    assert!(gimei.find_name_by_kanji("").is_none());
    assert!(gimei.find_name_by_hiragana("こばやし ぬけさく").is_none());
}

#[test]
fn animal_names_are_outside_the_lookup_tables() {
    let gimei = Gimei::seeded(4);
    let dog = gimei.dog();
    assert!(gimei.find_name_by_kanji(&dog.kanji()).is_none());
}

#[test]
fn addresses_need_full_coverage() {
    let gimei = Gimei::new();
    assert!(gimei.find_address_by_kanji("岡山県大島郡大和村稲木町1").is_none());
    assert!(gimei.find_address_by_kanji("岡山県大島郡大和村").is_none());
    assert!(gimei.find_address_by_kanji("").is_none());
    assert!(gimei.find_address("岡山県大島郡大和村稲木町", Script::Romaji).is_none());
}

#[test]
fn overlapping_rows_resolve_to_first_in_table_order() {
    let corpus = Corpus::builder()
        .addresses_yaml(OVERLAPPING_ADDRESSES)
        .build()
        .expect("fixture corpus");
    let gimei = Gimei::with_corpus(corpus);

    let address = gimei
        .find_address_by_kanji("東京都大島郡本町")
        .expect("ambiguous address");
    assert_eq!(address.city.kanji(), "大島");
    assert_eq!(address.town.kanji(), "郡本町");

    let address = gimei
        .find_address_by_katakana("トウキョウトオオシマホンチョウ")
        .expect("unambiguous address");
    assert_eq!(address.city.kanji(), "大島");
    assert_eq!(address.town.kanji(), "本町");
}
