/// Helper macro to avoid retyping the API group of the ACK SageMaker controller when creating
/// further string constants from it. When given no parameters, this returns the group name. When
/// given a string literal parameter it adds `/parameter` to the end.
macro_rules! sagemaker {
    () => {
        "sagemaker.services.k8s.aws"
    };
    ($s:literal) => {
        concat!(sagemaker!(), "/", $s)
    };
}

// API identifiers
pub const GROUP: &str = sagemaker!();
pub const VERSION: &str = "v1alpha1";
pub const API_VERSION: &str = sagemaker!("v1alpha1");

// Type names take the form `k8s_<group>_<kind>_<version>[_manifest]`
pub const TYPE_NAME_PREFIX: &str = "k8s";
pub const MANIFEST_SUFFIX: &str = "manifest";

#[test]
fn sagemaker_constants_macro_test() {
    assert_eq!("sagemaker.services.k8s.aws", sagemaker!());
    assert_eq!("sagemaker.services.k8s.aws/v1alpha1", API_VERSION);
    assert_eq!("sagemaker.services.k8s.aws/foo", sagemaker!("foo"));
}
