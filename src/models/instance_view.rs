use crate::models::Instance;
use crate::utils::format_launch_time;

/// Display-ready instance card. Absent values are already replaced with
/// their placeholders so templates and tables stay dumb.
#[derive(Clone, Debug)]
pub struct InstanceView {
    pub id: String,
    pub region: String,
    pub name: String,
    pub instance_type: String,
    pub public_ip: String,
    pub private_ip: String,
    pub launch_time: String,
    pub state: String,
    pub state_class: String,
    pub is_protected: bool,
}

impl InstanceView {
    pub fn from_instance(instance: &Instance, region: &str) -> Self {
        Self {
            id: instance.instance_id.clone(),
            region: region.to_string(),
            name: instance
                .name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "Unnamed".into()),
            instance_type: instance.instance_type.clone(),
            public_ip: instance.public_ip.clone().unwrap_or_else(|| "None".into()),
            private_ip: instance.private_ip.clone().unwrap_or_else(|| "None".into()),
            launch_time: instance
                .launch_time
                .map(format_launch_time)
                .unwrap_or_else(|| "Unknown".into()),
            state: instance.state.label(),
            state_class: instance.state.css_class(),
            is_protected: false,
        }
    }

    pub fn protected(mut self, is_protected: bool) -> Self {
        self.is_protected = is_protected;
        self
    }
}

/// One "Region: <name>" block on the instances page.
#[derive(Clone, Debug)]
pub struct RegionSectionView {
    pub region: String,
    pub instances: Vec<InstanceView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InstanceState;

    fn bare(id: &str) -> Instance {
        Instance {
            instance_id: id.into(),
            instance_type: "t3.micro".into(),
            public_ip: None,
            private_ip: None,
            launch_time: None,
            name: None,
            state: InstanceState::Running,
        }
    }

    #[test]
    fn placeholders_for_missing_fields() {
        let view = InstanceView::from_instance(&bare("i-0abc"), "eu-west-1");
        assert_eq!(view.name, "Unnamed");
        assert_eq!(view.public_ip, "None");
        assert_eq!(view.private_ip, "None");
        assert_eq!(view.launch_time, "Unknown");
        assert_eq!(view.state, "Running");
        assert_eq!(view.state_class, "state-running");
        assert_eq!(view.region, "eu-west-1");
    }

    #[test]
    fn empty_name_tag_counts_as_unnamed() {
        let mut instance = bare("i-0abc");
        instance.name = Some(String::new());
        assert_eq!(InstanceView::from_instance(&instance, "us-east-1").name, "Unnamed");
    }
}
