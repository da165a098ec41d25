use model::constants::{MANIFEST_SUFFIX, TYPE_NAME_PREFIX};

/// Converts a camelCase JSON field name of the ACK CRDs into the snake_case attribute name, e.g.
/// `executionRoleARN` becomes `execution_role_arn`. Runs of capitals are kept together as one
/// word, including a trailing plural `s` (`subnetIDs` becomes `subnet_ids`).
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut snake = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 && starts_word(&chars, i) && !snake.ends_with('_') {
                snake.push('_');
            }
            snake.push(c.to_ascii_lowercase());
        } else {
            snake.push(c);
        }
    }
    snake
}

/// Whether the capital at `i` begins a new word.
fn starts_word(chars: &[char], i: usize) -> bool {
    let previous = chars[i - 1];
    if previous.is_ascii_lowercase() || previous.is_ascii_digit() {
        return true;
    }
    // Inside a run of capitals, the last one starts the next word ("KMSKey"), unless what follows
    // is the plural of the run ("ARNs").
    previous.is_ascii_uppercase()
        && matches!(chars.get(i + 1), Some(next) if next.is_ascii_lowercase())
        && !is_plural_suffix(chars, i + 1)
}

fn is_plural_suffix(chars: &[char], i: usize) -> bool {
    chars[i] == 's'
        && chars
            .get(i + 1)
            .map(|next| !next.is_ascii_lowercase())
            .unwrap_or(true)
}

/// The type name of the data source that reads `K` from a cluster, e.g.
/// `k8s_sagemaker_services_k8s_aws_model_v1alpha1`.
pub fn data_source_type_name<K>() -> String
where
    K: kube::Resource<DynamicType = ()>,
{
    format!(
        "{}_{}_{}_{}",
        TYPE_NAME_PREFIX,
        K::group(&()).replace('.', "_"),
        snake_case(&K::kind(&())),
        K::version(&())
    )
}

/// The type name of the manifest that renders `K` as YAML, e.g.
/// `k8s_sagemaker_services_k8s_aws_model_v1alpha1_manifest`.
pub fn manifest_type_name<K>() -> String
where
    K: kube::Resource<DynamicType = ()>,
{
    format!("{}_{}", data_source_type_name::<K>(), MANIFEST_SUFFIX)
}

#[cfg(test)]
mod test {
    use super::*;
    use model::sagemaker::{DataQualityJobDefinition, Model};

    #[test]
    fn camel_case_becomes_snake_case() {
        assert_eq!(snake_case("modelName"), "model_name");
        assert_eq!(snake_case("tags"), "tags");
        assert_eq!(
            snake_case("rStudioServerProDomainSettings"),
            "r_studio_server_pro_domain_settings"
        );
        assert_eq!(snake_case("DataQualityJobDefinition"), "data_quality_job_definition");
    }

    #[test]
    fn acronyms_stay_together() {
        assert_eq!(snake_case("executionRoleARN"), "execution_role_arn");
        assert_eq!(snake_case("s3URI"), "s3_uri");
        assert_eq!(snake_case("kmsKeyID"), "kms_key_id");
        assert_eq!(snake_case("volumeKMSKeyID"), "volume_kms_key_id");
        assert_eq!(snake_case("maxPayloadInMB"), "max_payload_in_mb");
        assert_eq!(
            snake_case("homeEFSFileSystemKMSKeyID"),
            "home_efs_file_system_kms_key_id"
        );
    }

    #[test]
    fn plural_acronyms_stay_together() {
        assert_eq!(snake_case("subnetIDs"), "subnet_ids");
        assert_eq!(snake_case("securityGroupIDs"), "security_group_ids");
        assert_eq!(snake_case("lifecycleConfigARNs"), "lifecycle_config_arns");
    }

    #[test]
    fn trailing_underscores_are_kept() {
        assert_eq!(snake_case("type_"), "type_");
    }

    #[test]
    fn type_names() {
        assert_eq!(
            data_source_type_name::<Model>(),
            "k8s_sagemaker_services_k8s_aws_model_v1alpha1"
        );
        assert_eq!(
            manifest_type_name::<DataQualityJobDefinition>(),
            "k8s_sagemaker_services_k8s_aws_data_quality_job_definition_v1alpha1_manifest"
        );
    }
}
