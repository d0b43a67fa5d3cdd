use yew::prelude::*;

#[function_component(Privacy)]
pub fn privacy() -> Html {
    html! {
        <div class="privacy-page">
            <style>
                {r#"
                    .privacy-page {
                        max-width: 760px;
                        margin: 0 auto;
                        padding: 7rem 2rem 4rem;
                        color: rgba(255, 255, 255, 0.85);
                        line-height: 1.7;
                    }
                    .privacy-page h1 {
                        color: #fff;
                        margin-bottom: 2rem;
                    }
                    .privacy-page h2 {
                        color: #2ecc71;
                        margin: 2rem 0 0.8rem;
                        font-size: 1.3rem;
                    }
                "#}
            </style>
            <h1>{"Política de Privacidade"}</h1>
            <p>
                {"A TrilhaDev coleta apenas os dados que você envia nos formulários deste site: nome, e-mail, WhatsApp e, quando informado, empresa e momento de carreira. Usamos esses dados para enviar os materiais e convites que você pediu."}
            </p>
            <h2>{"Cookies e medição"}</h2>
            <p>
                {"Com o seu consentimento, registramos eventos de navegação (páginas vistas, cliques em botões e envios de formulário) para medir nossas campanhas. Recusar o banner de cookies desliga essa medição por completo; os formulários continuam funcionando normalmente."}
            </p>
            <h2>{"Seus direitos (LGPD)"}</h2>
            <p>
                {"Você pode pedir acesso, correção ou exclusão dos seus dados a qualquer momento escrevendo para privacidade@trilhadev.com.br. A escolha de cookies fica salva apenas no seu navegador e pode ser refeita limpando os dados do site."}
            </p>
        </div>
    }
}
