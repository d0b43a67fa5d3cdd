/// The fields a lead form knows how to render. Keeping this an enum instead
/// of a string-keyed table means a page asking for a field the form can't
/// render fails at compile time, not with a bare text input in production.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Email,
    Phone,
    Company,
    Role,
    Message,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputType {
    Text,
    Email,
    Tel,
    Select(&'static [&'static str]),
    TextArea,
}

pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input: InputType,
    pub required_message: &'static str,
}

const ROLE_OPTIONS: &[&str] = &[
    "Estudante",
    "Dev júnior",
    "Dev pleno/sênior",
    "Transição de carreira",
    "Outro",
];

impl FieldKind {
    pub fn key(&self) -> &'static str {
        self.descriptor().key
    }

    pub fn descriptor(&self) -> FieldDescriptor {
        match self {
            FieldKind::Name => FieldDescriptor {
                key: "name",
                label: "Nome",
                placeholder: "Seu nome completo",
                input: InputType::Text,
                required_message: "Informe seu nome",
            },
            FieldKind::Email => FieldDescriptor {
                key: "email",
                label: "E-mail",
                placeholder: "voce@exemplo.com.br",
                input: InputType::Email,
                required_message: "Informe um e-mail válido",
            },
            FieldKind::Phone => FieldDescriptor {
                key: "phone",
                label: "WhatsApp",
                placeholder: "(11) 98765-4321",
                input: InputType::Tel,
                required_message: "Informe seu WhatsApp com DDD",
            },
            FieldKind::Company => FieldDescriptor {
                key: "company",
                label: "Empresa",
                placeholder: "Onde você trabalha",
                input: InputType::Text,
                required_message: "Informe sua empresa",
            },
            FieldKind::Role => FieldDescriptor {
                key: "role",
                label: "Momento de carreira",
                placeholder: "Selecione",
                input: InputType::Select(ROLE_OPTIONS),
                required_message: "Selecione seu momento de carreira",
            },
            FieldKind::Message => FieldDescriptor {
                key: "message",
                label: "Mensagem",
                placeholder: "Conte pra gente o que você procura",
                input: InputType::TextArea,
                required_message: "Escreva uma mensagem",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique_json_identifiers() {
        let all = [
            FieldKind::Name,
            FieldKind::Email,
            FieldKind::Phone,
            FieldKind::Company,
            FieldKind::Role,
            FieldKind::Message,
        ];
        let mut seen = std::collections::HashSet::new();
        for kind in all {
            let key = kind.key();
            assert!(seen.insert(key), "duplicate key {}", key);
            assert!(key.chars().all(|c| c.is_ascii_lowercase() || c == '_'));
        }
    }

    #[test]
    fn role_renders_as_select_with_options() {
        match FieldKind::Role.descriptor().input {
            InputType::Select(options) => assert!(!options.is_empty()),
            other => panic!("expected select, got {:?}", other),
        }
    }
}
