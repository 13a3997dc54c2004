//! 語彙テーブル
//!
//! 英語キーワード → (カテゴリ, 訳語, 説明) の対応表。
//! 組み込み語彙はペットベッド向けの4カテゴリで、起動時に一度だけ構築される。
//! コアキーワードは実行毎に商品タイプの先頭へ追加する。

use crate::error::{Error, Result};
use crate::types::{Category, KeywordEntry};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// (キーワード, 訳語, 説明)
type BuiltinRow = (&'static str, &'static str, &'static str);

const PRODUCT_TYPES: &[BuiltinRow] = &[
    ("cave", "ドーム型", "潜り込めるドーム型ベッド"),
    ("house", "ハウス", "屋根付きの家型ベッド"),
    ("tent", "テント", "テント型の寝床"),
    ("hideaway", "隠れ家", "身を隠せる隠れ家タイプ"),
    ("condo", "コンド", "多段式のコンドミニアム型"),
    ("tunnel", "トンネル", "通り抜けできるトンネル型"),
    ("cushion", "クッション", "平たいクッション型"),
    ("pillow", "ピロー", "枕型の寝床"),
    ("sofa", "ソファ", "ソファ型ベッド"),
    ("couch", "カウチ", "背もたれ付きのカウチ型"),
    ("mat", "マット", "薄手の敷きマット"),
    ("nest", "巣型", "全身を包み込む巣型"),
    ("donut", "ドーナツ型", "縁が盛り上がったドーナツ型"),
    ("scratcher", "爪とぎ", "爪とぎ一体型"),
    ("tree", "キャットツリー", "登れるキャットツリー"),
];

const FEATURES: &[BuiltinRow] = &[
    ("calming", "落ち着く", "安心感を与える設計"),
    ("anxiety", "不安軽減", "不安・ストレスの軽減"),
    ("washable", "洗える", "丸洗い可能"),
    ("machine", "洗濯機可", "洗濯機で洗える"),
    ("orthopedic", "体圧分散", "関節をサポートする整形外科的設計"),
    ("warming", "保温", "自己発熱・保温機能"),
    ("slip", "滑り止め", "底面の滑り止め加工"),
    ("waterproof", "防水", "防水・撥水仕様"),
    ("cooling", "ひんやり", "冷感素材"),
    ("removable", "取り外し可", "カバーが取り外せる"),
    ("portable", "持ち運び", "携帯・持ち運びしやすい"),
    ("foldable", "折りたたみ", "折りたたんで収納できる"),
];

const MATERIALS: &[BuiltinRow] = &[
    ("plush", "プラッシュ", "毛足の長いぬいぐるみ生地"),
    ("soft", "柔らかい", "柔らかな手触り"),
    ("fluffy", "ふわふわ", "ふわふわの質感"),
    ("fur", "ファー", "フェイクファー"),
    ("sherpa", "ボア", "シェルパ（ボア）生地"),
    ("fleece", "フリース", "フリース素材"),
    ("cozy", "心地よい", "居心地のよさ"),
    ("luxury", "高級", "高級感のある仕上げ"),
];

const TARGETS: &[BuiltinRow] = &[
    ("indoor", "室内", "室内飼い向け"),
    ("small", "小型", "小型犬・小柄な猫向け"),
    ("puppy", "子犬", "子犬向け"),
    ("kitten", "子猫", "子猫向け"),
    ("medium", "中型", "中型犬向け"),
    ("large", "大型", "大型犬向け"),
];

/// コアキーワードに付与する表示情報
pub const CORE_TRANSLATION: &str = "コアキーワード";
pub const CORE_DESCRIPTION: &str = "入力されたコアキーワード";

lazy_static::lazy_static! {
    static ref BUILTIN: Vocabulary = Vocabulary::from_builtin_tables();
}

/// JSONファイル上の1エントリ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularyItem {
    pub keyword: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub description: String,
}

/// 語彙JSONファイルの構造
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularyFile {
    #[serde(default)]
    pub product: Vec<VocabularyItem>,
    #[serde(default)]
    pub feature: Vec<VocabularyItem>,
    #[serde(default)]
    pub material: Vec<VocabularyItem>,
    #[serde(default)]
    pub target: Vec<VocabularyItem>,
}

impl VocabularyFile {
    fn items(&self, category: Category) -> &[VocabularyItem] {
        match category {
            Category::Product => &self.product,
            Category::Feature => &self.feature,
            Category::Material => &self.material,
            Category::Target => &self.target,
        }
    }

    fn items_mut(&mut self, category: Category) -> &mut Vec<VocabularyItem> {
        match category {
            Category::Product => &mut self.product,
            Category::Feature => &mut self.feature,
            Category::Material => &mut self.material,
            Category::Target => &mut self.target,
        }
    }
}

/// 4カテゴリの語彙
///
/// エントリはカテゴリの優先順（商品タイプ→機能→素材→対象）、カテゴリ内は定義順に並ぶ。
/// 同じ綴りが複数カテゴリにある場合、索引は優先順位の高い方を指す。
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    entries: Vec<KeywordEntry>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// 組み込み語彙
    pub fn builtin() -> &'static Vocabulary {
        &BUILTIN
    }

    fn from_builtin_tables() -> Self {
        let tables = [
            (Category::Product, PRODUCT_TYPES),
            (Category::Feature, FEATURES),
            (Category::Material, MATERIALS),
            (Category::Target, TARGETS),
        ];

        let entries = tables
            .iter()
            .flat_map(|(category, rows)| {
                rows.iter().map(move |(keyword, translation, description)| KeywordEntry {
                    keyword: keyword.to_string(),
                    category: *category,
                    translation: translation.to_string(),
                    description: description.to_string(),
                })
            })
            .collect();

        Self::from_entries(entries)
    }

    /// エントリ列から構築（カテゴリ優先順に並べ直す）
    fn from_entries(mut entries: Vec<KeywordEntry>) -> Self {
        // 安定ソートなのでカテゴリ内の定義順は保たれる
        entries.sort_by_key(|e| Category::ALL.iter().position(|c| *c == e.category));

        let mut index = HashMap::new();
        for (i, entry) in entries.iter().enumerate() {
            index.entry(entry.keyword.to_lowercase()).or_insert(i);
        }

        Self { entries, index }
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let file: VocabularyFile = serde_json::from_str(json)?;
        Self::from_vocabulary_file(file)
    }

    /// ファイル構造から構築（空キーワード・カテゴリ内重複はエラー）
    pub fn from_vocabulary_file(file: VocabularyFile) -> Result<Self> {
        let mut entries = Vec::new();

        for category in Category::ALL {
            let mut seen = std::collections::HashSet::new();
            for item in file.items(category) {
                let keyword = item.keyword.trim();
                if keyword.is_empty() {
                    return Err(Error::InvalidVocabulary(format!(
                        "{}に空のキーワードがあります",
                        category
                    )));
                }
                if !seen.insert(keyword.to_lowercase()) {
                    return Err(Error::InvalidVocabulary(format!(
                        "{}のキーワードが重複しています: {}",
                        category, keyword
                    )));
                }
                entries.push(KeywordEntry {
                    keyword: keyword.to_string(),
                    category,
                    translation: item.translation.clone(),
                    description: item.description.clone(),
                });
            }
        }

        Ok(Self::from_entries(entries))
    }

    /// ファイル構造に変換
    pub fn to_vocabulary_file(&self) -> VocabularyFile {
        let mut file = VocabularyFile::default();
        for entry in &self.entries {
            file.items_mut(entry.category).push(VocabularyItem {
                keyword: entry.keyword.clone(),
                translation: entry.translation.clone(),
                description: entry.description.clone(),
            });
        }
        file
    }

    /// JSON文字列に変換
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_vocabulary_file())?)
    }

    /// コアキーワードを商品タイプの先頭に加えた実行用語彙を作る
    ///
    /// 既存の商品タイプと同じ綴り（大文字小文字無視）なら、そのエントリを先頭へ移動し
    /// 訳語・説明は組み込みのものを残す。
    pub fn with_core_keyword(&self, core_keyword: &str) -> Result<Vocabulary> {
        let core = core_keyword.trim();
        if core.is_empty() {
            return Err(Error::MissingCoreKeyword);
        }

        let lowered = core.to_lowercase();
        let mut entries = self.entries.clone();

        let existing = entries
            .iter()
            .position(|e| e.category == Category::Product && e.keyword.to_lowercase() == lowered);

        let core_entry = match existing {
            Some(pos) => entries.remove(pos),
            None => KeywordEntry {
                keyword: core.to_string(),
                category: Category::Product,
                translation: CORE_TRANSLATION.to_string(),
                description: CORE_DESCRIPTION.to_string(),
            },
        };
        entries.insert(0, core_entry);

        Ok(Self::from_entries(entries))
    }

    /// カテゴリ内で同じ綴りのエントリを探す
    pub fn find_in(&self, category: Category, keyword: &str) -> Option<&KeywordEntry> {
        let lowered = keyword.to_lowercase();
        self.entries(category)
            .find(|e| e.keyword.to_lowercase() == lowered)
    }

    /// キーワードのエントリを取得（複数カテゴリにある場合は優先順位の高い方）
    pub fn lookup(&self, keyword: &str) -> Option<&KeywordEntry> {
        self.index
            .get(&keyword.to_lowercase())
            .map(|&i| &self.entries[i])
    }

    /// 訳語を取得（未登録なら空文字）
    pub fn translation(&self, keyword: &str) -> &str {
        self.lookup(keyword)
            .map(|e| e.translation.as_str())
            .unwrap_or("")
    }

    /// カテゴリのエントリ（定義順）
    pub fn entries(&self, category: Category) -> impl Iterator<Item = &KeywordEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    /// カテゴリのキーワード一覧（定義順）
    pub fn keywords(&self, category: Category) -> Vec<&str> {
        self.entries(category).map(|e| e.keyword.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
