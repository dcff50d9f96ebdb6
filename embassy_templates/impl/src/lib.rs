use chrono::{DateTime, Datelike, Utc};
use embassy_templates_contracts::{ContactEmailTemplate, RenderedEmail, TemplateService};
use embassy_utils::trace_instrument;

use crate::{
    copy::contact_email_copy,
    escape::{encode_uri_component, escape_html},
};

mod copy;
mod escape;

/// Short month names of the `en-GB` locale.
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateServiceImpl;

impl TemplateService for TemplateServiceImpl {
    #[trace_instrument(skip(self, template), fields(locale = %template.locale))]
    fn render_contact_email(&self, template: &ContactEmailTemplate) -> RenderedEmail {
        let copy = contact_email_copy(template.locale);
        let submitted_at = format_submitted_at(template.submitted_at);
        let subject_line = format!("{} {}", copy.subject_prefix, template.subject);

        let text = [
            copy.heading.to_owned(),
            String::new(),
            format!("{}: {}", copy.sender_label, template.sender_name),
            format!("{}: {}", copy.email_label, template.sender_email),
            format!("{}: {}", copy.subject_label, template.subject),
            format!("{}: {submitted_at} UTC", copy.submitted_at_label),
            String::new(),
            format!("{}:", copy.message_label),
            template.message.clone(),
            String::new(),
            format!("Website: {}", template.website_url),
        ]
        .join("\n");

        let reply_to: String = template
            .sender_email
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let reply_href = format!(
            "mailto:{reply_to}?subject={}",
            encode_uri_component(&format!("Re: {}", template.subject))
        );

        let html = HtmlParts {
            title: &escape_html(&subject_line),
            preheader: &escape_html(copy.preview),
            banner: &escape_html(copy.banner),
            heading: &escape_html(copy.heading),
            subheading: &escape_html(copy.subheading),
            rows: &[
                (escape_html(copy.sender_label), escape_html(&template.sender_name)),
                (escape_html(copy.email_label), escape_html(&template.sender_email)),
                (escape_html(copy.subject_label), escape_html(&template.subject)),
                (
                    escape_html(copy.submitted_at_label),
                    format!("{} UTC", escape_html(&submitted_at)),
                ),
            ],
            message_label: &escape_html(copy.message_label),
            message: &escape_html(&template.message).replace('\n', "<br />"),
            reply_href: &escape_html(&reply_href),
            reply_button: &escape_html(copy.reply_button),
            footer: &escape_html(copy.footer),
            website_url: &escape_html(&template.website_url),
        }
        .render();

        RenderedEmail {
            subject_line,
            html,
            text,
        }
    }
}

/// `15 Jan 2025, 09:05`
fn format_submitted_at(submitted_at: DateTime<Utc>) -> String {
    format!(
        "{:02} {} {}, {}",
        submitted_at.day(),
        MONTHS[submitted_at.month0() as usize],
        submitted_at.year(),
        submitted_at.format("%H:%M")
    )
}

/// Already escaped fragments of the html body.
struct HtmlParts<'a> {
    title: &'a str,
    preheader: &'a str,
    banner: &'a str,
    heading: &'a str,
    subheading: &'a str,
    rows: &'a [(String, String)],
    message_label: &'a str,
    message: &'a str,
    reply_href: &'a str,
    reply_button: &'a str,
    footer: &'a str,
    website_url: &'a str,
}

impl HtmlParts<'_> {
    fn render(&self) -> String {
        let Self {
            title,
            preheader,
            banner,
            heading,
            subheading,
            rows,
            message_label,
            message,
            reply_href,
            reply_button,
            footer,
            website_url,
        } = self;

        let rows = rows
            .iter()
            .map(|(label, value)| {
                format!(
                    r#"
                  <tr>
                    <td style="padding:0 0 8px;font-size:12px;line-height:1.4;font-weight:700;color:#6b7280;text-transform:uppercase;letter-spacing:0.08em;">
                      {label}
                    </td>
                    <td style="padding:0 0 8px;font-size:14px;line-height:1.6;color:#111827;" align="right">
                      {value}
                    </td>
                  </tr>"#
                )
            })
            .collect::<String>();

        format!(
            r#"<!doctype html>
<html lang="en">
  <head>
    <meta http-equiv="Content-Type" content="text/html; charset=UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{title}</title>
  </head>
  <body style="margin:0;padding:0;background-color:#f4f5f7;font-family:Arial,Helvetica,sans-serif;color:#111827;">
    <span style="display:none!important;visibility:hidden;opacity:0;color:transparent;height:0;width:0;overflow:hidden;mso-hide:all;">
      {preheader}
    </span>
    <table role="presentation" cellpadding="0" cellspacing="0" border="0" width="100%" style="background-color:#f4f5f7;padding:24px 8px;">
      <tr>
        <td align="center">
          <table role="presentation" cellpadding="0" cellspacing="0" border="0" width="600" style="width:600px;max-width:600px;background-color:#ffffff;border-radius:14px;overflow:hidden;border:1px solid #e5e7eb;">
            <tr>
              <td style="padding:22px 28px;background:#cf102d;">
                <div style="font-size:11px;line-height:1.4;color:#ffd4dd;letter-spacing:0.12em;text-transform:uppercase;font-weight:700;">
                  {banner}
                </div>
                <div style="font-size:24px;line-height:1.25;color:#ffffff;font-weight:700;margin-top:6px;">
                  {heading}
                </div>
                <div style="font-size:14px;line-height:1.6;color:#ffe8ed;margin-top:8px;">
                  {subheading}
                </div>
              </td>
            </tr>
            <tr>
              <td style="padding:24px 28px 8px;">
                <table role="presentation" cellpadding="0" cellspacing="0" border="0" width="100%">{rows}
                </table>
              </td>
            </tr>
            <tr>
              <td style="padding:8px 28px 0;">
                <div style="height:4px;background:#00a651;border-radius:999px;"></div>
              </td>
            </tr>
            <tr>
              <td style="padding:18px 28px 0;">
                <div style="font-size:12px;line-height:1.4;font-weight:700;color:#6b7280;text-transform:uppercase;letter-spacing:0.08em;">
                  {message_label}
                </div>
              </td>
            </tr>
            <tr>
              <td style="padding:10px 28px 0;">
                <div style="font-size:15px;line-height:1.7;color:#111827;background:#f9fafb;border:1px solid #e5e7eb;border-radius:10px;padding:14px 16px;">
                  {message}
                </div>
              </td>
            </tr>
            <tr>
              <td style="padding:18px 28px 0;">
                <a href="{reply_href}" style="display:inline-block;background:#111827;color:#ffffff;text-decoration:none;font-size:14px;line-height:1.2;font-weight:700;border-radius:8px;padding:11px 16px;">
                  {reply_button}
                </a>
              </td>
            </tr>
            <tr>
              <td style="padding:18px 28px 24px;font-size:12px;line-height:1.6;color:#6b7280;">
                {footer}<br />
                <a href="{website_url}" style="color:#cf102d;text-decoration:underline;">{website_url}</a>
              </td>
            </tr>
          </table>
        </td>
      </tr>
    </table>
  </body>
</html>"#
        )
    }
}
