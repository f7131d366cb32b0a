//! PDF download of a rendered resume card through html2pdf.js.

use api::ResumeId;
use dioxus::prelude::*;

use crate::js::{js_string, BridgeReply};

pub const HTML2PDF_JS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/html2pdf.js/0.10.1/html2pdf.bundle.min.js";

/// DOM id of the card rendered for resume `id`.
pub fn card_element_id(id: ResumeId) -> String {
    format!("resume-cv-{id}")
}

pub fn pdf_filename(id: ResumeId) -> String {
    format!("resume-{id}.pdf")
}

/// Render the card for `id` as it is currently displayed into a letter-size
/// PDF and hand it to the browser as a download.
pub async fn download_resume(id: ResumeId) -> Result<(), String> {
    let js = format!(
        r#"(function() {{
            function render() {{
                var element = document.getElementById({id_js});
                if (!element) {{ dioxus.send({{ ok: false, error: 'Resume not rendered' }}); return; }}
                html2pdf().set({{
                    margin: 0.5,
                    filename: {file_js},
                    image: {{ type: 'jpeg', quality: 0.98 }},
                    html2canvas: {{ scale: 2 }},
                    jsPDF: {{ unit: 'in', format: 'letter', orientation: 'portrait' }}
                }}).from(element).save()
                    .then(function() {{ dioxus.send({{ ok: true }}); }})
                    .catch(function(e) {{ dioxus.send({{ ok: false, error: String(e) }}); }});
            }}
            if (typeof html2pdf !== 'undefined') {{ render(); return; }}
            var script = document.getElementById('html2pdf-js');
            if (!script) {{
                script = document.createElement('script');
                script.id = 'html2pdf-js';
                script.src = {src_js};
                document.head.appendChild(script);
            }}
            script.addEventListener('load', render);
            script.addEventListener('error', function() {{
                dioxus.send({{ ok: false, error: 'Could not load the PDF exporter' }});
            }});
        }})();"#,
        id_js = js_string(&card_element_id(id)),
        file_js = js_string(&pdf_filename(id)),
        src_js = js_string(HTML2PDF_JS),
    );

    let mut eval = document::eval(&js);
    match eval.recv::<BridgeReply>().await {
        Ok(BridgeReply { ok: true, .. }) => Ok(()),
        Ok(reply) => Err(reply.error.unwrap_or_else(|| "Download failed".to_string())),
        Err(e) => Err(format!("{e:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_follow_resume_id() {
        assert_eq!(card_element_id(42), "resume-cv-42");
        assert_eq!(pdf_filename(42), "resume-42.pdf");
    }
}
