use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Structured address embedded in a customer record.
///
/// An address is a value type: it has no identity of its own and is
/// always carried inside a [`Cliente`]. The `cep` field holds the
/// canonical display form `NNNNN-NNN` once resolved; while the user is
/// still typing it may hold a partial digit string. `complemento` is
/// optional and empty by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endereco {
    pub cep: String,
    pub logradouro: String,
    pub bairro: String,
    pub estado: String,
    pub localidade: String,
    pub complemento: String,
}

/// A customer record.
///
/// `id` is assigned by the store on creation and is immutable
/// afterwards; creation payloads may omit it (`serde(default)`).
/// Birth dates travel on the wire as ISO `YYYY-MM-DD`, the canonical
/// format for this system. Field names are camelCase on the wire
/// (`dataNascimento`), matching the persisted JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    #[serde(default)]
    pub id: i64,
    pub nome: String,
    pub sobrenome: String,
    pub email: String,
    pub data_nascimento: NaiveDate,
    pub telefone: String,
    pub endereco: Endereco,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cliente_joao() -> Cliente {
        Cliente {
            id: 1,
            nome: "João".to_string(),
            sobrenome: "Silva".to_string(),
            email: "joao.silva@example.com".to_string(),
            data_nascimento: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
            telefone: "(11) 99999-9999".to_string(),
            endereco: Endereco {
                cep: "01001-000".to_string(),
                logradouro: "Rua A, 123".to_string(),
                bairro: "Centro".to_string(),
                estado: "SP".to_string(),
                localidade: "São Paulo".to_string(),
                complemento: String::new(),
            },
        }
    }

    #[test]
    fn test_cliente_serializes_camel_case_iso_date() {
        let json = serde_json::to_value(cliente_joao()).unwrap();

        assert_eq!(json["nome"], "João");
        assert_eq!(json["dataNascimento"], "1990-05-15");
        assert_eq!(json["endereco"]["cep"], "01001-000");
        assert!(json.get("data_nascimento").is_none());
    }

    #[test]
    fn test_cliente_deserializes_without_id() {
        let json = r#"{
            "nome": "Maria",
            "sobrenome": "Oliveira",
            "email": "maria.oliveira@example.com",
            "dataNascimento": "1985-08-20",
            "telefone": "(11) 98888-8888",
            "endereco": { "cep": "01001-000" }
        }"#;

        let cliente: Cliente = serde_json::from_str(json).unwrap();
        assert_eq!(cliente.id, 0);
        assert_eq!(cliente.nome, "Maria");
        assert_eq!(cliente.endereco.logradouro, "");
    }

    #[test]
    fn test_cliente_round_trip() {
        let cliente = cliente_joao();
        let json = serde_json::to_string(&cliente).unwrap();
        let back: Cliente = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cliente);
    }

    #[test]
    fn test_endereco_default_is_empty() {
        let endereco = Endereco::default();
        assert_eq!(endereco.cep, "");
        assert_eq!(endereco.complemento, "");
    }
}
