#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Cloudinary account the hero video and remote images are served from.
/// Compiled in so a missing value is caught once at startup instead of
/// producing malformed URLs per request.
pub fn cloudinary_cloud_name() -> Option<&'static str> {
    option_env!("CLOUDINARY_CLOUD_NAME")
}

pub fn cloudinary_image_base_url() -> Option<String> {
    cloudinary_cloud_name().map(image_base_for)
}

pub fn cloudinary_video_base_url() -> Option<String> {
    cloudinary_cloud_name().map(video_base_for)
}

fn image_base_for(cloud_name: &str) -> String {
    format!("https://res.cloudinary.com/{}/image/upload/", cloud_name)
}

fn video_base_for(cloud_name: &str) -> String {
    format!("https://res.cloudinary.com/{}/video/upload/", cloud_name)
}

/// Business details shared by the about and contact sections.
pub mod site {
    pub const PHOTOGRAPHER: &str = "Rahul Nag";
    pub const PHONE_DISPLAY: &str = "+61 493 325 512";
    pub const PHONE_HREF: &str = "tel:+61493325512";
    pub const EMAIL: &str = "rahulnag0299@gmail.com";
    pub const EMAIL_HREF: &str = "mailto:rahulnag0299@gmail.com";
    pub const LOCATION: &str = "Sydney, Australia";
    pub const LOCATION_MAP: &str = "https://www.google.com/maps/place/Sydney,+Australia";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_base_embeds_cloud_name() {
        assert_eq!(
            image_base_for("die5nnvda"),
            "https://res.cloudinary.com/die5nnvda/image/upload/"
        );
    }

    #[test]
    fn video_base_embeds_cloud_name() {
        assert_eq!(
            video_base_for("die5nnvda"),
            "https://res.cloudinary.com/die5nnvda/video/upload/"
        );
    }
}
