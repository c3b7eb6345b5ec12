//! 共通型定義
//!
//! Customer等のコアデータ型

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// 顧客ID
///
/// クライアントが指定する非負整数。サーバー側で採番はしない。
pub type CustomerId = u32;

/// 顧客レコード
///
/// JSONのキーはPascalCase（`Id`, `Name`, ...）で出力する。
/// 読み込み時はキーの大文字小文字を区別しない（`id`, `NAME` も可）。
/// 欠けたフィールドはゼロ値（空文字列、`false`、`0`）で補われる。
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Customer {
    /// 一意識別子
    pub id: CustomerId,
    /// 氏名
    pub name: String,
    /// 役割
    pub role: String,
    /// メールアドレス
    pub email: String,
    /// 電話番号（先頭の0や記号を保持するため文字列）
    pub phone: String,
    /// 連絡済みフラグ
    pub contacted: bool,
}

/// 小文字化したキーで受ける読み込み用の形
#[derive(Default, Deserialize)]
#[serde(rename_all = "lowercase", default)]
struct CustomerFields {
    id: CustomerId,
    name: String,
    role: String,
    email: String,
    phone: String,
    contacted: bool,
}

impl From<CustomerFields> for Customer {
    fn from(fields: CustomerFields) -> Self {
        Self {
            id: fields.id,
            name: fields.name,
            role: fields.role,
            email: fields.email,
            phone: fields.phone,
            contacted: fields.contacted,
        }
    }
}

impl<'de> Deserialize<'de> for Customer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        let folded: Map<String, Value> = raw
            .into_iter()
            .map(|(key, value)| (key.to_lowercase(), value))
            .collect();
        let fields: CustomerFields =
            serde_json::from_value(Value::Object(folded)).map_err(D::Error::custom)?;
        Ok(fields.into())
    }
}

impl Customer {
    /// 指定IDに差し替えたレコードを返す
    pub fn with_id(self, id: CustomerId) -> Self {
        Self { id, ..self }
    }
}

/// 起動時に投入する初期レコード
pub fn seed_customers() -> Vec<Customer> {
    vec![
        Customer {
            id: 0,
            name: "Peppa Pig".to_string(),
            role: "Cheeky Piggy".to_string(),
            email: "peppa.pig@somewhere.in.uk".to_string(),
            phone: "+44-00-98765-23".to_string(),
            contacted: false,
        },
        Customer {
            id: 1,
            name: "Suzie Sheep".to_string(),
            role: "Peppa's BFF".to_string(),
            email: "suzie.sheep@somewhere.in.uk".to_string(),
            phone: "+44-00-987432-23".to_string(),
            contacted: false,
        },
        Customer {
            id: 2,
            name: "Mandy Mouse".to_string(),
            role: "Peppa's playmate".to_string(),
            email: "mandy.mouse@somewhere.in.uk".to_string(),
            phone: "+44-00-98325-23".to_string(),
            contacted: true,
        },
    ]
}
